use api::NewPost;

/// Field-level messages for the create-post form. `None` means the field
/// passed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DraftErrors {
    pub title: Option<&'static str>,
    pub body: Option<&'static str>,
}

impl DraftErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none()
    }
}

/// Check a draft before submission.
///
/// Both fields are required non-empty strings; nothing else is enforced
/// client-side. Runs synchronously, and any error blocks the request.
pub fn validate(draft: &NewPost) -> DraftErrors {
    DraftErrors {
        title: draft.title.is_empty().then_some("Title is required"),
        body: draft.body.is_empty().then_some("Body is required"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, body: &str) -> NewPost {
        NewPost {
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn accepts_non_empty_fields() {
        assert!(validate(&draft("a title", "a body")).is_empty());
    }

    #[test]
    fn missing_title_flags_title_only() {
        let errors = validate(&draft("", "x"));
        assert_eq!(errors.title, Some("Title is required"));
        assert_eq!(errors.body, None);
        assert!(!errors.is_empty());
    }

    #[test]
    fn missing_body_flags_body_only() {
        let errors = validate(&draft("x", ""));
        assert_eq!(errors.title, None);
        assert_eq!(errors.body, Some("Body is required"));
    }

    #[test]
    fn empty_draft_flags_both_fields() {
        let errors = validate(&draft("", ""));
        assert!(errors.title.is_some());
        assert!(errors.body.is_some());
    }
}
