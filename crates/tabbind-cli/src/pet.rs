//! The record shape the CLI binds files to.

use serde::Serialize;

tabbind::record! {
    #[derive(Debug, Default, Clone, PartialEq, Serialize)]
    pub struct Pet {
        /// Owner's name.
        #[column("name")]
        pub name: String,
        /// Age in years.
        #[column("age")]
        pub age: i64,
        /// Whether the owner has a pet.
        #[column("has_pet")]
        pub has_pet: bool,
    }
}
