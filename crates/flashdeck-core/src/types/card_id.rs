// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt::Display;
use std::fmt::Formatter;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::Fallible;

const ID_LEN: usize = 12;

/// The canonical identifier of a card, assigned by the document store when
/// the card is created.
///
/// The first four bytes are the big-endian creation time in seconds, so ids
/// from the same store sort roughly by age. The remaining eight bytes are
/// random-looking and only guarantee uniqueness.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardId {
    bytes: [u8; ID_LEN],
}

impl CardId {
    pub fn from_bytes(bytes: [u8; ID_LEN]) -> Self {
        Self { bytes }
    }

    /// Creation time in seconds since the Unix epoch.
    pub fn timestamp(&self) -> u32 {
        u32::from_be_bytes([self.bytes[0], self.bytes[1], self.bytes[2], self.bytes[3]])
    }

    pub fn to_hex(self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    pub fn from_hex(s: &str) -> Fallible<Self> {
        if s.len() != ID_LEN * 2 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ErrorReport::new(format!("invalid card id: {s:?}")));
        }
        let mut bytes = [0u8; ID_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16)
                .map_err(|_| ErrorReport::new(format!("invalid card id: {s:?}")))?;
        }
        Ok(Self { bytes })
    }
}

impl Display for CardId {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for CardId {
    type Err = ErrorReport;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CardId::from_hex(s)
    }
}

impl TryFrom<String> for CardId {
    type Error = ErrorReport;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CardId::from_hex(&value)
    }
}

impl From<CardId> for String {
    fn from(id: CardId) -> String {
        id.to_hex()
    }
}

/// Hands out fresh card ids. Each generator is seeded once and then counts
/// upwards, hashing the seed and counter together.
pub struct IdGenerator {
    seed: u64,
    counter: u64,
}

impl IdGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self { seed, counter: 0 }
    }

    /// Generate the next id, stamped with the given creation time.
    pub fn next_id(&mut self, timestamp: u32) -> CardId {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.seed.to_le_bytes());
        hasher.update(&self.counter.to_le_bytes());
        self.counter = self.counter.wrapping_add(1);
        let digest = hasher.finalize();

        let mut bytes = [0u8; ID_LEN];
        bytes[..4].copy_from_slice(&timestamp.to_be_bytes());
        bytes[4..].copy_from_slice(&digest.as_bytes()[..ID_LEN - 4]);
        CardId { bytes }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_display() -> Fallible<()> {
        let id = CardId::from_hex("65f1a2b3c4d5e6f708192a3b")?;
        assert_eq!(id.to_string(), "65f1a2b3c4d5e6f708192a3b");
        assert_eq!(id.timestamp(), 0x65f1a2b3);
        Ok(())
    }

    #[test]
    fn test_uppercase_is_normalized() -> Fallible<()> {
        let id: CardId = "65F1A2B3C4D5E6F708192A3B".parse()?;
        assert_eq!(id.to_hex(), "65f1a2b3c4d5e6f708192a3b");
        Ok(())
    }

    #[test]
    fn test_invalid_ids() {
        assert!(CardId::from_hex("").is_err());
        assert!(CardId::from_hex("65f1a2b3").is_err());
        assert!(CardId::from_hex("65f1a2b3c4d5e6f708192a3g").is_err());
        assert!(CardId::from_hex("65f1a2b3c4d5e6f708192a3bff").is_err());
        // Same byte length, but not ASCII.
        assert!(CardId::from_hex("65f1a2b3c4d5e6f708192aé").is_err());
    }

    #[test]
    fn test_ordering_follows_timestamp() -> Fallible<()> {
        let older = CardId::from_hex("000000010000000000000000")?;
        let newer = CardId::from_hex("00000002ffffffffffffffff")?;
        assert!(older < newer);
        Ok(())
    }

    #[test]
    fn test_serialize() -> Fallible<()> {
        let id = CardId::from_hex("65f1a2b3c4d5e6f708192a3b")?;
        let serialized = serde_json::to_string(&id)?;
        assert_eq!(serialized, "\"65f1a2b3c4d5e6f708192a3b\"");
        let parsed: CardId = serde_json::from_str(&serialized)?;
        assert_eq!(parsed, id);
        assert!(serde_json::from_str::<CardId>("\"nope\"").is_err());
        Ok(())
    }

    #[test]
    fn test_generator_ids_are_unique() {
        let mut generator = IdGenerator::from_seed(42);
        let ids: HashSet<CardId> = (0..1000).map(|_| generator.next_id(7)).collect();
        assert_eq!(ids.len(), 1000);
        assert!(ids.iter().all(|id| id.timestamp() == 7));
    }

    #[test]
    fn test_generator_is_deterministic() {
        let mut a = IdGenerator::from_seed(1);
        let mut b = IdGenerator::from_seed(1);
        let mut c = IdGenerator::from_seed(2);
        let first = a.next_id(0);
        assert_eq!(first, b.next_id(0));
        assert_ne!(first, c.next_id(0));
    }
}
