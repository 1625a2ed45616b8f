//! I/O adapters for the streaming digests.
//!
//! # Example
//!
//! ```rust,no_run
//! use murmur::{Digest128, StreamingHash};
//! use std::fs::File;
//!
//! let mut reader = Digest128::reader(File::open("data.bin")?);
//! std::io::copy(&mut reader, &mut std::io::sink())?;
//! println!("{:x}", reader.sum());
//! # Ok::<(), std::io::Error>(())
//! ```

pub use traits::io::{HashReader, HashWriter};
