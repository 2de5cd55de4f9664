//! Shell sin interfaz gráfica de Arpa: posee la colección y el reproductor
//! y expone la barra lateral como modelo de datos.

pub mod shell;
pub mod sidebar;

pub use shell::Shell;
pub use sidebar::{Sidebar, SidebarNode};
