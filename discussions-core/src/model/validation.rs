/*
    validation.rs - Client-side validation issues

    Validation failures are data, not errors: they gate submission and are
    recomputed as the offending fields change, so they carry no error
    plumbing of their own.
*/

use super::types::TopicId;
use serde::Serialize;
use std::fmt;

/// What kind of constraint a field violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Required field is empty
    Required,
    /// Value collides with another entry (case-insensitive, trimmed)
    Duplicate,
}

/// Where a validation issue was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueLocation {
    /// A named provider settings field, e.g. "consumerKey"
    Field(&'static str),
    /// The name of a specific discussion topic
    Topic(TopicId),
}

/// A single client-side validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub location: IssueLocation,
    pub kind: IssueKind,
}

impl ValidationIssue {
    pub fn required_field(field: &'static str) -> Self {
        ValidationIssue {
            location: IssueLocation::Field(field),
            kind: IssueKind::Required,
        }
    }

    pub fn topic(id: TopicId, kind: IssueKind) -> Self {
        ValidationIssue {
            location: IssueLocation::Topic(id),
            kind,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.location, self.kind) {
            (IssueLocation::Field(name), IssueKind::Required) => {
                write!(f, "required field {} is empty", name)
            }
            (IssueLocation::Field(name), IssueKind::Duplicate) => {
                write!(f, "field {} duplicates another value", name)
            }
            (IssueLocation::Topic(id), IssueKind::Required) => {
                write!(f, "topic {} has no name", id)
            }
            (IssueLocation::Topic(id), IssueKind::Duplicate) => {
                write!(f, "topic {} duplicates another topic name", id)
            }
        }
    }
}
