mod certificate;
mod common;
mod signed;
mod verification;
mod xml;

pub use certificate::*;
pub use common::{RevocationStatus, STATUS_ACTIVE};
pub use signed::*;
pub use verification::*;
pub use xml::*;
