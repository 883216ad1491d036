use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ProfileError;
use crate::tags::TagSet;
use crate::validate;

/// Store-assigned profile identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(pub u64);

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProfileId {
    fn from(value: u64) -> Self {
        ProfileId(value)
    }
}

/// A stored user profile.
///
/// The matching engine only reads `skills` and `interests`; every other field
/// is payload carried through to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub skills: TagSet,
    #[serde(default)]
    pub interests: TagSet,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub colab_url: Option<String>,
}

impl Profile {
    /// Minimal profile carrying only tags; handy for tests and benches.
    pub fn with_tags(id: impl Into<ProfileId>, skills: TagSet, interests: TagSet) -> Self {
        let id = id.into();
        Self {
            id,
            full_name: format!("profile-{id}"),
            email: format!("profile-{id}@example.com"),
            headline: None,
            skills,
            interests,
            github_url: None,
            colab_url: None,
        }
    }
}

/// Payload for creating a profile. Everything except the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProfile {
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub skills: TagSet,
    #[serde(default)]
    pub interests: TagSet,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub colab_url: Option<String>,
}

impl NewProfile {
    pub fn new(full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            headline: None,
            skills: TagSet::new(),
            interests: TagSet::new(),
            github_url: None,
            colab_url: None,
        }
    }

    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = Some(headline.into());
        self
    }

    pub fn with_skills(mut self, skills: TagSet) -> Self {
        self.skills = skills;
        self
    }

    pub fn with_interests(mut self, interests: TagSet) -> Self {
        self.interests = interests;
        self
    }

    pub fn with_github_url(mut self, url: impl Into<String>) -> Self {
        self.github_url = Some(url.into());
        self
    }

    /// Validate every field and return the cleaned payload.
    pub fn validate(self) -> Result<NewProfile, ProfileError> {
        Ok(NewProfile {
            full_name: validate::full_name(&self.full_name)?,
            email: validate::email(&self.email)?,
            headline: validate::headline(self.headline)?,
            skills: self.skills,
            interests: self.interests,
            github_url: validate::url("github_url", self.github_url)?,
            colab_url: validate::url("colab_url", self.colab_url)?,
        })
    }

    /// Attach an id. Callers are expected to have validated first.
    pub fn into_profile(self, id: ProfileId) -> Profile {
        Profile {
            id,
            full_name: self.full_name,
            email: self.email,
            headline: self.headline,
            skills: self.skills,
            interests: self.interests,
            github_url: self.github_url,
            colab_url: self.colab_url,
        }
    }
}

/// Partial update. Absent fields are left untouched.
///
/// For nullable fields an explicit `null` clears the value: `headline: null`
/// deserializes to `Some(None)`, an omitted `headline` to `None`. Tag fields
/// set to `null` become empty sets. `email` cannot be changed through a patch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub headline: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub skills: Option<TagSet>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub interests: Option<TagSet>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub github_url: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub colab_url: Option<Option<String>>,
}

/// A field that appears in the input at all is `Some`, even when it is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl ProfilePatch {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.headline.is_none()
            && self.skills.is_none()
            && self.interests.is_none()
            && self.github_url.is_none()
            && self.colab_url.is_none()
    }

    /// Names of the fields this patch touches, for logging.
    pub fn touched_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.full_name.is_some() {
            fields.push("full_name");
        }
        if self.headline.is_some() {
            fields.push("headline");
        }
        if self.skills.is_some() {
            fields.push("skills");
        }
        if self.interests.is_some() {
            fields.push("interests");
        }
        if self.github_url.is_some() {
            fields.push("github_url");
        }
        if self.colab_url.is_some() {
            fields.push("colab_url");
        }
        fields
    }

    /// Validate the patch and apply it to `profile`.
    ///
    /// Validation runs on every present field before anything is written, so
    /// a rejected patch leaves the profile unchanged.
    pub fn apply(self, profile: &mut Profile) -> Result<(), ProfileError> {
        let full_name = self
            .full_name
            .as_deref()
            .map(validate::full_name)
            .transpose()?;
        let headline = self.headline.map(validate::headline).transpose()?;
        let github_url = self
            .github_url
            .map(|v| validate::url("github_url", v))
            .transpose()?;
        let colab_url = self
            .colab_url
            .map(|v| validate::url("colab_url", v))
            .transpose()?;

        if let Some(name) = full_name {
            profile.full_name = name;
        }
        if let Some(headline) = headline {
            profile.headline = headline;
        }
        if let Some(skills) = self.skills {
            profile.skills = skills;
        }
        if let Some(interests) = self.interests {
            profile.interests = interests;
        }
        if let Some(url) = github_url {
            profile.github_url = url;
        }
        if let Some(url) = colab_url {
            profile.colab_url = url;
        }
        Ok(())
    }
}
