//! In-progress report being composed.
//!
//! A [`DraftReport`] holds the four text fields and exactly [`PHOTO_SLOTS`]
//! positional photo slots. Length limits are enforced at input time by
//! truncation, counted in characters.

use std::fmt;

use super::error::{Result, UrbanfyError};
use super::report::{Category, NewReport, PhotoPayload};

/// Number of photo slots in a draft.
pub const PHOTO_SLOTS: usize = 3;

/// Maximum title length, in characters.
pub const TITULO_MAX_CHARS: usize = 26;

/// Maximum description length, in characters.
pub const DESCRICAO_MAX_CHARS: usize = 583;

/// Maximum address length, in characters.
pub const ENDERECO_MAX_CHARS: usize = 200;

/// Required fields of a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Titulo,
    Descricao,
    Endereco,
    Categoria,
}

impl Field {
    /// Input limit for text fields. `None` for the category selector.
    #[must_use]
    pub const fn max_chars(self) -> Option<usize> {
        match self {
            Self::Titulo => Some(TITULO_MAX_CHARS),
            Self::Descricao => Some(DESCRICAO_MAX_CHARS),
            Self::Endereco => Some(ENDERECO_MAX_CHARS),
            Self::Categoria => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Titulo => "titulo",
            Self::Descricao => "descricao",
            Self::Endereco => "endereco",
            Self::Categoria => "categoria",
        })
    }
}

/// The unsaved report owned by the composer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftReport {
    pub titulo: String,
    pub descricao: String,
    pub endereco: String,
    /// `None` only when explicitly cleared; defaults to the first category.
    pub categoria: Option<Category>,
    pub fotos: [Option<PhotoPayload>; PHOTO_SLOTS],
}

impl Default for DraftReport {
    fn default() -> Self {
        Self {
            titulo: String::new(),
            descricao: String::new(),
            endereco: String::new(),
            categoria: Some(Category::default()),
            fotos: [None, None, None],
        }
    }
}

impl DraftReport {
    /// Sets a field from raw input, truncating text to its limit.
    ///
    /// For [`Field::Categoria`] a blank value clears the selection and any other
    /// value must name a [`Category`].
    ///
    /// # Errors
    ///
    /// Returns [`UrbanfyError::InvalidCategory`] for an unknown category label. Text
    /// fields never fail.
    pub fn set_field(&mut self, field: Field, value: &str) -> Result<()> {
        match field {
            Field::Titulo => self.titulo = truncate_chars(value, TITULO_MAX_CHARS),
            Field::Descricao => self.descricao = truncate_chars(value, DESCRICAO_MAX_CHARS),
            Field::Endereco => self.endereco = truncate_chars(value, ENDERECO_MAX_CHARS),
            Field::Categoria => {
                self.categoria = if value.trim().is_empty() {
                    None
                } else {
                    Some(value.parse()?)
                };
            }
        }
        Ok(())
    }

    pub fn set_category(&mut self, category: Category) {
        self.categoria = Some(category);
    }

    /// Stores a photo in `slot`, replacing whatever was there.
    ///
    /// # Errors
    ///
    /// Returns [`UrbanfyError::InvalidSlot`] when `slot >= PHOTO_SLOTS`.
    pub fn set_photo(&mut self, slot: usize, photo: PhotoPayload) -> Result<()> {
        let entry = self
            .fotos
            .get_mut(slot)
            .ok_or(UrbanfyError::InvalidSlot(slot))?;
        *entry = Some(photo);
        Ok(())
    }

    /// Checks that every required field is non-blank. Photos are optional.
    ///
    /// # Errors
    ///
    /// Returns [`UrbanfyError::MissingField`] naming the first blank field.
    pub fn validate(&self) -> Result<()> {
        let text_fields = [
            (Field::Titulo, &self.titulo),
            (Field::Descricao, &self.descricao),
            (Field::Endereco, &self.endereco),
        ];
        if let Some((field, _)) = text_fields.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(UrbanfyError::MissingField(*field));
        }
        if self.categoria.is_none() {
            return Err(UrbanfyError::MissingField(Field::Categoria));
        }
        Ok(())
    }

    /// Builds the creation body: validated text fields plus the filled photo
    /// slots in slot order (empty and blank slots dropped).
    ///
    /// # Errors
    ///
    /// Same as [`validate`](Self::validate).
    pub fn to_payload(&self) -> Result<NewReport> {
        self.validate()?;
        let categoria = self
            .categoria
            .ok_or(UrbanfyError::MissingField(Field::Categoria))?;
        Ok(NewReport {
            titulo: self.titulo.clone(),
            descricao: self.descricao.clone(),
            endereco: self.endereco.clone(),
            categoria,
            fotos: self
                .fotos
                .iter()
                .flatten()
                .filter(|p| !p.is_blank())
                .cloned()
                .collect(),
        })
    }

    /// Number of filled photo slots.
    #[must_use]
    pub fn photo_count(&self) -> usize {
        self.fotos.iter().flatten().count()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

fn truncate_chars(value: &str, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((idx, _)) => value[..idx].to_string(),
        None => value.to_string(),
    }
}
