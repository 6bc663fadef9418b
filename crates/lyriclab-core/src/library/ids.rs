use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

define_id!(SongId, "Server-assigned identifier of a saved song.");
define_id!(UserId, "Server-assigned identifier of a user.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_id_display() {
        let id = SongId::new("song_1a2b3c4d5e6f");
        assert_eq!(id.to_string(), "song_1a2b3c4d5e6f");
        assert_eq!(id.as_str(), "song_1a2b3c4d5e6f");
    }

    #[test]
    fn test_ids_serialize_as_plain_strings() {
        let id = UserId::from("user_42");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"user_42\"");
        let back: UserId = serde_json::from_str("\"user_42\"").unwrap();
        assert_eq!(back, id);
    }
}
