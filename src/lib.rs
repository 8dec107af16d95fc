use std::{fs::File, io::Read, path::Path};

pub mod ast;
pub mod compiler;
pub mod frontend;
pub mod semantic;
pub mod utils;

pub use compiler::Compiler;
pub use utils::errors;

pub const VERSION: &str = "0.1.0";

use crate::errors::{PascalError, PascalResult};

pub fn read(filename: &Path) -> PascalResult<String> {
    match filename.extension() {
        Some(ext) if ext == "pas" => {}
        _ => {
            return Err(PascalError::FileRead("File must have a .pas extension".to_string()));
        }
    }
    let mut file = File::open(filename)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}
