//! Modelo de entradas de Arpa: cada `Entry` es un elemento multimedia
//! (canción, vídeo...) con identidad, tipo, estado de reproducción y tags
//! libres, y `EntryCollection` es su único dueño.

pub mod art;
pub mod collection;
pub mod entry;
pub mod media;
pub mod signal;
pub mod tags;

pub use collection::EntryCollection;
pub use entry::{Entry, EntryId};
pub use media::{EntryState, MediaType, StateGlyph};
pub use signal::{StateObservers, SubscriptionId};
