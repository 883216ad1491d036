//! Set-derivation helper: the four tag intersections between two profiles.
//!
//! "Cross" terms pair one side's skills with the other side's interests;
//! "common" terms pair like with like. Both the match predicate and the
//! scorer are defined on top of these counts.

use profile::Profile;
use serde::{Deserialize, Serialize};

/// Intersection sizes between a subject `S` and a candidate `C`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Overlap {
    /// `|S.skills ∩ C.interests|`
    pub skills_to_interests: usize,
    /// `|S.interests ∩ C.skills|`
    pub interests_to_skills: usize,
    /// `|S.skills ∩ C.skills|`
    pub shared_skills: usize,
    /// `|S.interests ∩ C.interests|`
    pub shared_interests: usize,
}

impl Overlap {
    pub fn between(subject: &Profile, candidate: &Profile) -> Self {
        Self {
            skills_to_interests: subject.skills.intersection_count(&candidate.interests),
            interests_to_skills: subject.interests.intersection_count(&candidate.skills),
            shared_skills: subject.skills.intersection_count(&candidate.skills),
            shared_interests: subject.interests.intersection_count(&candidate.interests),
        }
    }

    /// Complementary overlap in both directions.
    pub fn cross(&self) -> usize {
        self.skills_to_interests + self.interests_to_skills
    }

    /// Peer-similarity overlap.
    pub fn common(&self) -> usize {
        self.shared_skills + self.shared_interests
    }

    /// The same overlap seen from the candidate's side.
    pub fn swapped(&self) -> Self {
        Self {
            skills_to_interests: self.interests_to_skills,
            interests_to_skills: self.skills_to_interests,
            shared_skills: self.shared_skills,
            shared_interests: self.shared_interests,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cross() == 0 && self.common() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use profile::TagSet;

    fn profile(id: u64, skills: &[&str], interests: &[&str]) -> Profile {
        Profile::with_tags(id, TagSet::from_strs(skills), TagSet::from_strs(interests))
    }

    #[test]
    fn counts_each_term_independently() {
        let s = profile(1, &["python", "pandas", "nlp"], &["recsys", "vector-search"]);
        let d = profile(2, &["ml", "recsys", "python"], &["nlp", "vector-search", "sql"]);
        let overlap = Overlap::between(&s, &d);
        assert_eq!(
            overlap,
            Overlap {
                skills_to_interests: 1,
                interests_to_skills: 1,
                shared_skills: 1,
                shared_interests: 1,
            }
        );
        assert_eq!(overlap.cross(), 2);
        assert_eq!(overlap.common(), 2);
    }

    #[test]
    fn swapping_roles_mirrors_cross_terms() {
        let s = profile(1, &["python", "pandas"], &["sql"]);
        let c = profile(2, &["sql", "viz"], &["python"]);
        assert_eq!(Overlap::between(&s, &c).swapped(), Overlap::between(&c, &s));
    }

    #[test]
    fn empty_subject_has_empty_overlap() {
        let s = profile(1, &[], &[]);
        let c = profile(2, &["python"], &["python"]);
        assert!(Overlap::between(&s, &c).is_empty());
    }
}
