pub mod go;
pub mod health;
