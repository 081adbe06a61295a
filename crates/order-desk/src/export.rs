//! # Document Export
//!
//! Writes the whole desk as a YAML-style text document:
//!
//! ```text
//! ---
//! alimentos:
//!   - id: 1
//!     nombre: "Taco"
//!     precio: 2.50
//!     disponible: Si
//! clientes:
//!   - id: 5
//!     nombre: "Ana"
//!     telefono: "5512345678"
//! menus:
//!   - id: 10
//!     fecha: "2024-01-01"
//!     alimentos:
//!       - id: 9
//!         error: "No encontrado"
//! pedidos:
//!   - id: 3
//!     cliente_id: 5
//!     fecha: "2024-02-02"
//!     estado: "Pendiente"
//!     menus: [10, 11]
//! ```
//!
//! Records appear in table order (bucket, then chain). Menu foods are looked up and
//! embedded; ids that no longer resolve get the `No encontrado` marker. Quoted strings
//! escape `"` and `\`.

use crate::desk::OrderDesk;
use crate::menu_store::ResolvedFood;
use crate::model::Food;
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info};

/// Extension every saved document carries.
pub const DOCUMENT_EXTENSION: &str = "yaml";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Could not write document: {0}")]
    Io(#[from] io::Error),
}

/// Renders the desk as a document string.
pub fn render_document(desk: &OrderDesk) -> String {
    Document(desk).to_string()
}

/// Writes the document to `path`, appending `.yaml` unless the path already ends with it.
/// Returns the path actually written.
pub fn save_document(desk: &OrderDesk, path: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
    let path = with_document_extension(path.as_ref());
    write_file(desk, &path).map_err(|e| {
        error!(path = %path.display(), error = %e, "Export failed");
        e
    })?;
    info!(path = %path.display(), "Document saved");
    Ok(path)
}

fn write_file(desk: &OrderDesk, path: &Path) -> Result<(), ExportError> {
    let mut out = BufWriter::new(File::create(path)?);
    write!(out, "{}", Document(desk))?;
    out.flush()?;
    Ok(())
}

/// `data` becomes `data.yaml`, `data.txt` becomes `data.txt.yaml`, `data.yaml` is unchanged.
pub fn with_document_extension(path: &Path) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == DOCUMENT_EXTENSION) {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(DOCUMENT_EXTENSION);
    PathBuf::from(name)
}

struct Document<'a>(&'a OrderDesk);

impl fmt::Display for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let desk = self.0;
        writeln!(f, "---")?;

        writeln!(f, "alimentos:")?;
        for food in desk.foods.iter() {
            write_food(f, food, "  ")?;
        }

        writeln!(f, "clientes:")?;
        for client in desk.clients.iter() {
            writeln!(f, "  - id: {}", client.id)?;
            writeln!(f, "    nombre: {}", Quoted(&client.name))?;
            writeln!(f, "    telefono: {}", Quoted(&client.phone))?;
        }

        writeln!(f, "menus:")?;
        for menu in desk.menus.iter() {
            writeln!(f, "  - id: {}", menu.id)?;
            writeln!(f, "    fecha: {}", Quoted(&menu.date))?;
            writeln!(f, "    alimentos:")?;
            for resolved in menu.resolve_foods(&desk.foods) {
                match resolved {
                    ResolvedFood::Found(food) => write_food(f, food, "      ")?,
                    ResolvedFood::Missing(id) => {
                        writeln!(f, "      - id: {id}")?;
                        writeln!(f, "        error: \"No encontrado\"")?;
                    }
                }
            }
        }

        writeln!(f, "pedidos:")?;
        for order in desk.orders.iter() {
            writeln!(f, "  - id: {}", order.id)?;
            writeln!(f, "    cliente_id: {}", order.client_id)?;
            writeln!(f, "    fecha: {}", Quoted(&order.date))?;
            writeln!(f, "    estado: {}", Quoted(order.status.label()))?;
            let menus: Vec<String> = order.menus.iter().map(i32::to_string).collect();
            writeln!(f, "    menus: [{}]", menus.join(", "))?;
        }
        Ok(())
    }
}

fn write_food(f: &mut fmt::Formatter<'_>, food: &Food, indent: &str) -> fmt::Result {
    writeln!(f, "{indent}- id: {}", food.id)?;
    writeln!(f, "{indent}  nombre: {}", Quoted(&food.name))?;
    writeln!(f, "{indent}  precio: {:.2}", food.price)?;
    writeln!(f, "{indent}  disponible: {}", food.availability_label())
}

/// Double-quoted scalar.
struct Quoted<'a>(&'a str);

impl fmt::Display for Quoted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for c in self.0.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                c => write!(f, "{c}")?,
            }
        }
        f.write_str("\"")
    }
}
