//! Validation for course payloads.

use crate::course::db::CourseData;
use crate::prelude::*;

impl CourseData {
    pub fn sanitize(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            photo: self.photo.trim().to_string(),
            alt: self.alt.trim().to_string(),
            background: self.background.trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty()
            || self.description.is_empty()
            || self.photo.is_empty()
            || self.alt.is_empty()
            || self.background.is_empty()
        {
            return Err(Error::Validation);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course() -> CourseData {
        CourseData {
            title: "Test title".to_string(),
            description: "Test description".to_string(),
            photo: "Test photo".to_string(),
            alt: "Test alt".to_string(),
            background: "Test background".to_string(),
        }
    }

    #[test]
    fn full_payload_is_valid() {
        assert!(course().sanitize().validate().is_ok());
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut data = course();
        data.title = "  ".to_string();
        assert!(matches!(data.sanitize().validate(), Err(Error::Validation)));
    }

    #[test]
    fn empty_background_is_rejected() {
        let mut data = course();
        data.background = String::new();
        assert!(matches!(data.validate(), Err(Error::Validation)));
    }
}
