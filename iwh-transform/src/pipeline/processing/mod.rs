// Transform processing: field cleaning, entity resolution, relationship
// extraction, and final schema assembly. Everything here is synchronous and
// pure; I/O lives behind the collaborator seams.

pub mod assemble;
pub mod clean;
pub mod relate;
pub mod resolve;
pub mod slug;
