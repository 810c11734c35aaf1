use vidgen_core::{build_request, GenerationRequest, ImageSource, Selection, ValidationError};

#[test]
fn missing_image_is_rejected() {
    let selection = Selection {
        image: None,
        text: "Hello".to_string(),
    };

    assert_eq!(
        build_request(&selection),
        Err(ValidationError::MissingImage)
    );
}

#[test]
fn whitespace_only_text_is_rejected() {
    let selection = Selection {
        image: Some(ImageSource::Cataloged {
            id: "img1".to_string(),
        }),
        text: " \t \n".to_string(),
    };

    assert_eq!(build_request(&selection), Err(ValidationError::EmptyText));
}

#[test]
fn uploaded_image_builds_a_binary_payload_with_trimmed_text() {
    let selection = Selection {
        image: Some(ImageSource::Uploaded {
            bytes: vec![9, 9, 9],
            filename: "portrait.jpeg".to_string(),
        }),
        text: "  Welcome!  ".to_string(),
    };

    let request = build_request(&selection).expect("valid selection");
    assert_eq!(
        request,
        GenerationRequest::Upload {
            image: vec![9, 9, 9],
            filename: "portrait.jpeg".to_string(),
            text: "Welcome!".to_string(),
        }
    );
    assert_eq!(request.text(), "Welcome!");
}

#[test]
fn cataloged_image_builds_a_reference_payload() {
    let selection = Selection {
        image: Some(ImageSource::Cataloged {
            id: "img3".to_string(),
        }),
        text: "Second template".to_string(),
    };

    assert_eq!(
        build_request(&selection),
        Ok(GenerationRequest::CatalogRef {
            image_id: "img3".to_string(),
            text: "Second template".to_string(),
        })
    );
}

#[test]
fn validation_messages_are_user_facing() {
    assert_eq!(
        ValidationError::MissingImage.to_string(),
        "Please choose an image"
    );
    assert_eq!(ValidationError::EmptyText.to_string(), "Please enter text");
}
