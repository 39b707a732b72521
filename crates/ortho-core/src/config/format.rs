// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Configuration formats and read/write support

#[cfg(feature = "serde")]
use serde::{Serialize, de::DeserializeOwned};
use std::path::Path;
use thiserror::Error;

/// Configuration read/write/validation errors
#[derive(Error, Debug)]
pub enum Error {
    #[cfg(feature = "yaml")]
    #[error("config deserialisation from YAML failed")]
    YamlDe(#[from] serde::de::value::Error),

    #[cfg(feature = "yaml")]
    #[error("config serialisation to YAML failed")]
    YamlSer(#[from] serde_yaml2::ser::Errors),

    #[cfg(feature = "json")]
    #[error("config (de)serialisation to JSON failed")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "ron")]
    #[error("config serialisation to RON failed")]
    Ron(#[from] ron::Error),

    #[cfg(feature = "ron")]
    #[error("config deserialisation from RON failed")]
    RonSpanned(#[from] ron::error::SpannedError),

    #[cfg(feature = "toml")]
    #[error("config deserialisation from TOML failed")]
    TomlDe(#[from] toml::de::Error),

    #[cfg(feature = "toml")]
    #[error("config serialisation to TOML failed")]
    TomlSer(#[from] toml::ser::Error),

    #[error("error reading / writing config file")]
    IoError(#[from] std::io::Error),

    #[error("format not supported: {0}")]
    UnsupportedFormat(Format),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Configuration serialisation formats
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Error)]
pub enum Format {
    /// Not specified: guess from the path
    #[default]
    #[error("no format")]
    None,

    /// JavaScript Object Notation
    #[error("JSON")]
    Json,

    /// Tom's Obvious Minimal Language
    #[error("TOML")]
    Toml,

    /// YAML Ain't Markup Language
    #[error("YAML")]
    Yaml,

    /// Rusty Object Notation
    #[error("RON")]
    Ron,

    /// Error: unable to guess format
    #[error("(unknown format)")]
    Unknown,
}

impl Format {
    /// Guess format from the path name
    ///
    /// This does not open the file. On failure, returns [`Format::Unknown`].
    pub fn guess_from_path(path: &Path) -> Format {
        // use == since there is no OsStr literal
        match path.extension() {
            Some(ext) if ext == "json" => Format::Json,
            Some(ext) if ext == "toml" => Format::Toml,
            Some(ext) if ext == "yaml" || ext == "yml" => Format::Yaml,
            Some(ext) if ext == "ron" => Format::Ron,
            _ => Format::Unknown,
        }
    }

    /// Resolve [`Format::None`] by guessing from `path`
    fn or_guess(self, path: &Path) -> Format {
        match self {
            Format::None => Format::guess_from_path(path),
            other => other,
        }
    }

    /// Parse from a string
    #[cfg(feature = "serde")]
    pub fn read_str<T: DeserializeOwned>(self, text: &str) -> Result<T, Error> {
        match self {
            #[cfg(feature = "json")]
            Format::Json => Ok(serde_json::from_str(text)?),
            #[cfg(feature = "yaml")]
            Format::Yaml => Ok(serde_yaml2::from_str(text)?),
            #[cfg(feature = "ron")]
            Format::Ron => Ok(ron::from_str(text)?),
            #[cfg(feature = "toml")]
            Format::Toml => Ok(toml::from_str(text)?),
            _ => {
                let _ = text; // squelch unused warning
                Err(Error::UnsupportedFormat(self))
            }
        }
    }

    /// Serialise to a string
    #[cfg(feature = "serde")]
    pub fn write_string<T: Serialize>(self, value: &T) -> Result<String, Error> {
        match self {
            #[cfg(feature = "json")]
            Format::Json => Ok(serde_json::to_string_pretty(value)?),
            #[cfg(feature = "yaml")]
            Format::Yaml => Ok(serde_yaml2::to_string(value)?),
            #[cfg(feature = "ron")]
            Format::Ron => {
                let pretty = ron::ser::PrettyConfig::default();
                Ok(ron::ser::to_string_pretty(value, pretty)?)
            }
            #[cfg(feature = "toml")]
            Format::Toml => Ok(toml::to_string(value)?),
            _ => {
                let _ = value; // squelch unused warning
                Err(Error::UnsupportedFormat(self))
            }
        }
    }

    /// Read from a path
    ///
    /// If `self` is [`Format::None`] the format is guessed from the path.
    #[cfg(feature = "serde")]
    pub fn read_path<T: DeserializeOwned>(self, path: &Path) -> Result<T, Error> {
        let format = self.or_guess(path);
        log::debug!("read_path: path={}, format={:?}", path.display(), format);
        if matches!(format, Format::None | Format::Unknown) {
            return Err(Error::UnsupportedFormat(format));
        }
        let contents = std::fs::read_to_string(path)?;
        format.read_str(&contents)
    }

    /// Write to a path
    ///
    /// If `self` is [`Format::None`] the format is guessed from the path.
    #[cfg(feature = "serde")]
    pub fn write_path<T: Serialize>(self, path: &Path, value: &T) -> Result<(), Error> {
        let format = self.or_guess(path);
        log::debug!("write_path: path={}, format={:?}", path.display(), format);
        // Note: serialise fully before writing; a failure must not leave an
        // incomplete document.
        let text = format.write_string(value)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}
