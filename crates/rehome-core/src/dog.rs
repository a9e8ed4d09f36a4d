//! The dog record type.

use serde::{Deserialize, Serialize};

use crate::types::DogId;

/// An adoptable dog record.
///
/// Always sourced from the service; the client never constructs or mutates
/// one, it only displays records and references them by id. Field names
/// match the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    /// Opaque record identifier.
    pub id: DogId,

    /// Photo URL.
    pub img: String,

    /// Display name.
    pub name: String,

    /// Age in years.
    pub age: u8,

    /// Postal code of the dog's location.
    pub zip_code: String,

    /// Breed name.
    pub breed: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_format() {
        let dog: Dog = serde_json::from_str(
            r#"{
                "id": "NGFGTIcBOvEgQ5OCx40W",
                "img": "https://example.com/abby.jpg",
                "name": "Abby",
                "age": 4,
                "zip_code": "60601",
                "breed": "Poodle"
            }"#,
        )
        .unwrap();

        assert_eq!(dog.name, "Abby");
        assert_eq!(dog.age, 4);
        assert_eq!(dog.zip_code, "60601");
        assert_eq!(dog.breed, "Poodle");
    }
}
