//! # Integration Fixtures
//!
//! Plain-text stand-ins for the address book and record file parsers, and a
//! builder for complete state proof payloads.
//!
//! ```text
//! address book : one `node_id=hex_der_key` per line
//! record file  : `hash=<hex>` then one transaction id per line
//! ```

use state_proof::adapters::encode_bundle;
use state_proof::test_utils::{
    filled_hash, public_key_hex, signed_v2_file, signed_v5_file, test_key,
};
use state_proof::{
    AddressBook, AddressBookParser, CollaboratorError, RecordFile, RecordFileParser, Sha384Hash,
    StateProofBundle,
};
use std::collections::BTreeMap;
use std::sync::Once;

/// Install a test subscriber honoring `RUST_LOG`.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn utf8(bytes: &[u8]) -> Result<&str, String> {
    std::str::from_utf8(bytes).map_err(|e| e.to_string())
}

/// Line-based address book; later books override earlier entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineAddressBookParser;

impl AddressBookParser for LineAddressBookParser {
    fn parse_address_books(&self, books: &[Vec<u8>]) -> Result<AddressBook, CollaboratorError> {
        let mut address_book = AddressBook::new();
        for book in books {
            let text = utf8(book).map_err(CollaboratorError::AddressBook)?;
            for line in text.lines().filter(|l| !l.trim().is_empty()) {
                let (node, key) = line.split_once('=').ok_or_else(|| {
                    CollaboratorError::AddressBook(format!("bad entry: {line}"))
                })?;
                address_book.insert(node.trim().to_string(), key.trim().to_string());
            }
        }
        Ok(address_book)
    }
}

/// Line-based record file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineRecordFileParser;

impl RecordFileParser for LineRecordFileParser {
    fn parse_record_file(&self, bytes: &[u8]) -> Result<RecordFile, CollaboratorError> {
        let text = utf8(bytes).map_err(CollaboratorError::RecordFile)?;
        let mut lines = text.lines();

        let hash = lines
            .next()
            .and_then(|l| l.strip_prefix("hash="))
            .ok_or_else(|| CollaboratorError::RecordFile("missing hash line".to_string()))?;
        let hash = hex::decode(hash).map_err(|e| CollaboratorError::RecordFile(e.to_string()))?;

        Ok(RecordFile {
            transaction_ids: lines.map(str::to_string).collect(),
            hash,
        })
    }
}

/// Signature file layout a node publishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureFormat {
    V2,
    V5,
}

/// Builder for a complete state proof payload.
#[derive(Debug, Clone)]
pub struct ProofBuilder {
    known_nodes: usize,
    record_hash: Sha384Hash,
    transaction_ids: Vec<String>,
    signatures: BTreeMap<String, Vec<u8>>,
}

impl ProofBuilder {
    /// `known_nodes` entries in the address book, no signatures yet.
    pub fn new(known_nodes: usize, record_hash: Sha384Hash) -> Self {
        Self {
            known_nodes,
            record_hash,
            transaction_ids: Vec::new(),
            signatures: BTreeMap::new(),
        }
    }

    pub fn node_id(index: usize) -> String {
        format!("0.0.{}", index + 3)
    }

    pub fn transaction(mut self, id: &str) -> Self {
        self.transaction_ids.push(id.to_string());
        self
    }

    /// Node `index` signs `hash` in the given format.
    pub fn signed(mut self, index: usize, hash: Sha384Hash, format: SignatureFormat) -> Self {
        let key = test_key(index);
        let file = match format {
            SignatureFormat::V2 => signed_v2_file(key, &hash),
            SignatureFormat::V5 => signed_v5_file(key, &hash, &filled_hash(0xAA)),
        };
        self.signatures.insert(Self::node_id(index), file);
        self
    }

    /// Replace the raw signature file of node `index`.
    pub fn raw_signature_file(mut self, index: usize, bytes: Vec<u8>) -> Self {
        self.signatures.insert(Self::node_id(index), bytes);
        self
    }

    pub fn signature_file_mut(&mut self, index: usize) -> Option<&mut Vec<u8>> {
        self.signatures.get_mut(&Self::node_id(index))
    }

    pub fn bundle(&self) -> StateProofBundle {
        let address_book: String = (0..self.known_nodes)
            .map(|i| format!("{}={}\n", Self::node_id(i), public_key_hex(test_key(i))))
            .collect();

        let mut record = format!("hash={}\n", hex::encode(self.record_hash));
        for id in &self.transaction_ids {
            record.push_str(id);
            record.push('\n');
        }

        StateProofBundle {
            address_books: vec![address_book.into_bytes()],
            record_file: record.into_bytes(),
            signature_files: self.signatures.clone(),
        }
    }

    pub fn payload(&self) -> Vec<u8> {
        encode_bundle(&self.bundle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_parsers_round_trip_builder() {
        let builder = ProofBuilder::new(2, filled_hash(1)).transaction("0_0_100_1_2");
        let bundle = builder.bundle();

        let book = LineAddressBookParser
            .parse_address_books(&bundle.address_books)
            .unwrap();
        assert_eq!(book.len(), 2);
        assert!(book.contains_key("0.0.3"));

        let record = LineRecordFileParser
            .parse_record_file(&bundle.record_file)
            .unwrap();
        assert_eq!(record.hash, filled_hash(1).to_vec());
        assert!(record.contains("0_0_100_1_2"));
    }

    #[test]
    fn test_record_parser_requires_hash() {
        assert!(matches!(
            LineRecordFileParser.parse_record_file(b"0_0_1"),
            Err(CollaboratorError::RecordFile(_))
        ));
    }
}
