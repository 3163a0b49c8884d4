//! Report detail renderer.

use crate::ui::viewmodel::DetailViewModel;
use std::io::{self, Write};

/// Writes every field of the report followed by its photos.
///
/// A lone photo is labelled as the main image; several are numbered.
pub fn render_detail_body<W: Write>(out: &mut W, detail: &DetailViewModel, cols: usize) -> io::Result<()> {
    writeln!(out, "{}", detail.titulo)?;
    writeln!(out, "{}", "=".repeat(cols))?;
    writeln!(out, "Categoria: {}", detail.categoria)?;
    writeln!(out, "Endereço:  {}", detail.endereco)?;
    writeln!(out, "Data:      {}", detail.date)?;
    writeln!(out)?;
    writeln!(out, "{}", detail.descricao)?;

    match detail.photos.as_slice() {
        [] => Ok(()),
        [photo] if detail.single_photo => {
            writeln!(out)?;
            writeln!(out, "Foto: {photo}")
        }
        photos => {
            writeln!(out)?;
            writeln!(out, "Fotos:")?;
            for (index, photo) in photos.iter().enumerate() {
                writeln!(out, "  {}. {photo}", index + 1)?;
            }
            Ok(())
        }
    }
}
