#![allow(clippy::unwrap_used, clippy::panic_in_result_fn)]

use masking as pii;

#[test]
fn for_string() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use pii::Secret;
    use serde::Serialize;

    #[derive(Clone, Debug, Serialize, PartialEq, Eq)]
    pub struct Composite {
        secret_number: Secret<String>,
        not_secret: String,
    }

    // construct

    let composite = Composite {
        secret_number: Secret::new("abc".to_string()),
        not_secret: "not secret".to_string(),
    };

    // clone

    let composite2 = composite.clone();
    assert_eq!(composite, composite2);

    // format

    let got = format!("{:?}", composite);
    let exp =
        "Composite { secret_number: *** alloc::string::String ***, not_secret: \"not secret\" }";
    assert_eq!(got, exp);

    // serialize

    let got = serde_json::to_string(&composite).unwrap();
    let exp = "{\"secret_number\":\"abc\",\"not_secret\":\"not secret\"}";
    assert_eq!(got, exp);

    // end

    Ok(())
}

#[test]
fn without_type() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use pii::{Secret, WithoutType};

    let secret: Secret<String, WithoutType> = Secret::new("12345678".to_string());

    assert_eq!("*** ***", format!("{:?}", secret));

    Ok(())
}

#[test]
fn deserialize_and_peek() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use pii::{PeekInterface, Secret};

    let secret: Secret<u16> = serde_json::from_str("2030")?;
    assert_eq!(*secret.peek(), 2030);

    let not_a_number = serde_json::from_str::<Secret<u16>>("\"2030\"");
    assert!(not_a_number.is_err());

    Ok(())
}

#[test]
fn expose_option() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use pii::{ExposeOptionInterface, Secret};

    let some_secret: Option<Secret<String>> = Some(Secret::new("abc".to_string()));
    let no_secret: Option<Secret<String>> = None;

    assert_eq!(some_secret.expose_option(), Some("abc".to_string()));
    assert_eq!(no_secret.expose_option(), None);

    Ok(())
}
