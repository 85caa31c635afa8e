//! Character vault persistence.
//!
//! The vault owns the full character collection and rewrites the whole JSON
//! snapshot after every mutation. There is a single writer per session, so no
//! locking or incremental writes are involved.
//!
//! The snapshot is a bare JSON array of characters with no version envelope;
//! collections written by older tooling load unchanged.

use crate::sheet::{Character, CharacterId};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{debug, warn};

/// Errors from vault operations.
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Repository over the persisted character collection.
#[derive(Debug)]
pub struct CharacterVault {
    path: PathBuf,
    characters: Vec<Character>,
}

impl CharacterVault {
    /// Open the vault at the given path.
    ///
    /// A missing file is an empty collection. Content that does not parse as
    /// a character sequence is also treated as empty rather than failing the
    /// load; the next write replaces it.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, VaultError> {
        let path = path.as_ref().to_path_buf();
        let characters = match fs::read_to_string(&path).await {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(characters) => characters,
                Err(error) => {
                    warn!(%error, path = %path.display(), "malformed vault content, starting empty");
                    Vec::new()
                }
            },
            Err(error) if error.kind() == ErrorKind::NotFound => Vec::new(),
            Err(error) => return Err(error.into()),
        };

        Ok(Self { path, characters })
    }

    /// The characters in collection order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Find a character by id.
    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.iter().find(|character| character.id == id)
    }

    /// Upsert a character by id and rewrite the snapshot. An existing record
    /// is replaced in place, keeping its position; a new one is appended.
    pub async fn save_character(&mut self, character: Character) -> Result<(), VaultError> {
        match self
            .characters
            .iter_mut()
            .find(|existing| existing.id == character.id)
        {
            Some(existing) => *existing = character,
            None => self.characters.push(character),
        }
        self.commit().await
    }

    /// Remove a character by id and rewrite the snapshot. Returns whether a
    /// record was removed.
    pub async fn delete_character(&mut self, id: CharacterId) -> Result<bool, VaultError> {
        let before = self.characters.len();
        self.characters.retain(|character| character.id != id);
        if self.characters.len() == before {
            return Ok(false);
        }
        self.commit().await?;
        Ok(true)
    }

    async fn commit(&self) -> Result<(), VaultError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let content = serde_json::to_string_pretty(&self.characters)?;
        fs::write(&self.path, content).await?;
        debug!(count = self.characters.len(), "vault snapshot written");
        Ok(())
    }
}

/// Default per-user vault location.
pub fn default_vault_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "ghanor-forge")
        .map(|dirs| dirs.data_dir().join("characters.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{ClassKind, RaceKind};
    use crate::skills::Skill;
    use crate::{AttributeSet, WizardState};
    use tempfile::TempDir;

    fn sample_character(name: &str) -> Character {
        let mut wizard = WizardState::new();
        wizard.name = name.to_string();
        wizard.concept = "Herói de teste".to_string();
        wizard.base_attributes = AttributeSet::new(1, 0, 1, 0, 0, 0);
        wizard.select_race(RaceKind::Hobgoblin);
        wizard.select_class(ClassKind::Soldado);
        assert!(wizard.select_origin("Escudeiro"));
        assert!(wizard.toggle_skill(Skill::Luta));
        while wizard.step() != crate::WizardStep::Review {
            wizard.advance().expect("sample wizard should advance");
        }
        wizard.finalize().expect("sample wizard should finalize")
    }

    #[tokio::test]
    async fn test_open_missing_file_is_empty() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("characters.json");

        let vault = CharacterVault::open(&path).await.expect("open should succeed");
        assert!(vault.characters().is_empty());
    }

    #[tokio::test]
    async fn test_save_and_reload_round_trip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("characters.json");

        let character = sample_character("Korgar");
        let mut vault = CharacterVault::open(&path).await.expect("open should succeed");
        vault
            .save_character(character.clone())
            .await
            .expect("save should succeed");

        let reloaded = CharacterVault::open(&path).await.expect("reopen should succeed");
        assert_eq!(reloaded.characters(), &[character.clone()]);
        assert_eq!(reloaded.get(character.id), Some(&character));
    }

    #[tokio::test]
    async fn test_upsert_replaces_in_place() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("characters.json");

        let first = sample_character("Primeiro");
        let second = sample_character("Segundo");

        let mut vault = CharacterVault::open(&path).await.expect("open should succeed");
        vault.save_character(first.clone()).await.expect("save should succeed");
        vault.save_character(second.clone()).await.expect("save should succeed");

        let wounded = first.adjust_hp(-4);
        vault.save_character(wounded.clone()).await.expect("save should succeed");

        // Order is preserved and there is still one record per id.
        let names: Vec<_> = vault
            .characters()
            .iter()
            .map(|character| character.name.as_str())
            .collect();
        assert_eq!(names, vec!["Primeiro", "Segundo"]);
        assert_eq!(vault.get(first.id), Some(&wounded));
    }

    #[tokio::test]
    async fn test_delete_character() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("characters.json");

        let character = sample_character("Efêmera");
        let mut vault = CharacterVault::open(&path).await.expect("open should succeed");
        vault
            .save_character(character.clone())
            .await
            .expect("save should succeed");

        assert!(vault
            .delete_character(character.id)
            .await
            .expect("delete should succeed"));
        assert!(vault.characters().is_empty());

        // Deleting again reports nothing removed.
        assert!(!vault
            .delete_character(character.id)
            .await
            .expect("delete should succeed"));

        let reloaded = CharacterVault::open(&path).await.expect("reopen should succeed");
        assert!(reloaded.characters().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_content_falls_back_to_empty() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("characters.json");
        std::fs::write(&path, "{not json").expect("write should succeed");

        let vault = CharacterVault::open(&path).await.expect("open should succeed");
        assert!(vault.characters().is_empty());
    }

    #[tokio::test]
    async fn test_commit_creates_parent_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("nested").join("characters.json");

        let mut vault = CharacterVault::open(&path).await.expect("open should succeed");
        vault
            .save_character(sample_character("Aninhada"))
            .await
            .expect("save should succeed");

        assert!(path.exists());
    }
}
