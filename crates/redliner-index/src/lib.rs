//! Redliner Index Layer
//!
//! In-memory vector search over playbook chunks.
//!
//! # Architecture
//!
//! - `embedding`: offline hashing embedder implementing the domain `Embedder` trait
//! - `vector_index`: exact squared-L2 nearest-neighbour index
//!
//! Indexes are built per analysis and dropped afterwards; nothing is persisted.
//!
//! # Examples
//!
//! ```
//! use redliner_index::{HashingEmbedder, VectorIndex};
//!
//! let embedder = HashingEmbedder::new(1024);
//! let vectors = vec![
//!     embedder.embed_one("Vendors must sign NDAs").unwrap(),
//!     embedder.embed_one("Invoices are paid monthly").unwrap(),
//! ];
//! let index = VectorIndex::build(vectors).unwrap();
//!
//! let query = embedder.embed_one("Do vendors sign NDAs?").unwrap();
//! let hits = index.search(&query, 1).unwrap();
//! assert_eq!(hits[0].id, 0);
//! ```

#![warn(missing_docs)]

pub mod embedding;
pub mod vector_index;

pub use embedding::{EmbeddingError, HashingEmbedder};
pub use vector_index::{IndexError, Neighbour, VectorIndex};
