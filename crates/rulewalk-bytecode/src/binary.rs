//! Binary serialization for compiled grammars using postcard.
//!
//! Layout: 4-byte magic, little-endian `u16` version, postcard-encoded tables.
//! Nodes travel in their packed 32-bit form.

use crate::{CompiledGrammar, GrammarError};

pub const MAGIC: [u8; 4] = *b"RWGR";
pub const VERSION: u16 = 1;

const HEADER_LEN: usize = MAGIC.len() + size_of::<u16>();

impl CompiledGrammar {
    /// Serialize the tables to the binary format.
    pub fn to_binary(&self) -> Vec<u8> {
        let body = postcard::to_allocvec(self).expect("serialization should not fail");
        let mut out = Vec::with_capacity(HEADER_LEN + body.len());
        out.extend_from_slice(&MAGIC);
        out.extend_from_slice(&VERSION.to_le_bytes());
        out.extend_from_slice(&body);
        out
    }

    /// Load and verify tables produced by [`CompiledGrammar::to_binary`].
    pub fn from_binary(bytes: &[u8]) -> Result<Self, GrammarError> {
        if bytes.len() < HEADER_LEN || bytes[..MAGIC.len()] != MAGIC {
            return Err(GrammarError::InvalidMagic);
        }
        let version = u16::from_le_bytes([bytes[4], bytes[5]]);
        if version != VERSION {
            return Err(GrammarError::UnsupportedVersion(version));
        }

        let (grammar, rest): (CompiledGrammar, _) =
            postcard::take_from_bytes(&bytes[HEADER_LEN..]).map_err(GrammarError::Binary)?;
        if !rest.is_empty() {
            return Err(GrammarError::TrailingBytes(rest.len()));
        }

        grammar.verify()?;
        Ok(grammar)
    }
}
