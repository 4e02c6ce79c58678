use crate::domain::{Document, DomainError, UploadedFile};

/// Decodes an upload as strict UTF-8. No lossy replacement, no BOM stripping.
pub fn decode_utf8(file: &UploadedFile) -> Result<String, DomainError> {
    std::str::from_utf8(&file.bytes)
        .map(str::to_owned)
        .map_err(|_| DomainError::decode(&file.filename))
}

impl TryFrom<&UploadedFile> for Document {
    type Error = DomainError;

    fn try_from(file: &UploadedFile) -> Result<Self, Self::Error> {
        decode_utf8(file).map(|text| Document::new(&file.filename, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;

    #[test]
    fn test_decode_valid_utf8() {
        let file = UploadedFile::new("greek.txt", "καλημέρα\n".as_bytes());
        assert_eq!(decode_utf8(&file).unwrap(), "καλημέρα\n");
    }

    #[test]
    fn test_decode_invalid_utf8_names_file() {
        let file = UploadedFile::new("image.png", vec![0x89, 0x50, 0xff, 0xfe]);
        let err = decode_utf8(&file).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DecodeFailure);
        assert_eq!(err.to_string(), "Cannot decode 'image.png'.");
    }

    #[test]
    fn test_document_from_upload() {
        let file = UploadedFile::new("a.txt", "alpha");
        let doc = Document::try_from(&file).unwrap();
        assert_eq!(doc.filename, "a.txt");
        assert_eq!(doc.text, "alpha");
    }
}
