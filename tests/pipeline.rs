//! End-to-end: adapter -> stream -> collect -> marshal -> unmarshal.

use miette::Diagnostic;
use pretty_assertions::assert_eq;
use solid::prelude::*;
use solid::{DecodeError, Error, StreamError};

fn pipeline(n: i32) -> solid::Result<SolidList<i32>> {
    let data: Vec<i32> = (1..=n).collect();
    let list = integers(data).collect_solid()?;
    let blob = list.marshal();
    Ok(SolidList::unmarshal(&blob)?)
}

fn code_of(error: &Error) -> Option<String> {
    error.code().map(|code| code.to_string())
}

#[test]
fn full_data_flow_round_trips() {
    for n in [0, 1, 1000] {
        let expected: SolidList<i32> = (1..=n).collect();
        assert_eq!(pipeline(n), Ok(expected));
    }
}

#[test]
fn composed_pipeline_with_strings() -> solid::Result<()> {
    let names = of(vec!["ada", "grace", "barbara", "alan"])
        .filter(|name| name.starts_with('a'))
        .map(str::to_uppercase)
        .collect_solid()?;
    assert_eq!(names, SolidList::from([String::from("ADA"), String::from("ALAN")]));

    let decoded = SolidList::<String>::unmarshal(&names.marshal())?;
    assert_eq!(decoded, names);
    Ok(())
}

#[test]
fn exhaustion_converts_into_the_facade_error() {
    let one = integers([1]);
    let mut cursor = one.iterator();
    let mut read_twice = || -> solid::Result<i32> { Ok(cursor.next()? + cursor.next()?) };
    let error = read_twice().unwrap_err();

    assert_eq!(error, Error::Exhausted { position: 1 });
    assert_eq!(code_of(&error), Some("solid::stream::exhausted".to_string()));
}

#[test]
fn truncated_blob_converts_into_the_facade_error() {
    let blob = SolidList::from([1i32, 2, 3]).marshal();
    let error: Error = SolidList::<i32>::unmarshal(&blob[..blob.len() - 1])
        .map_err(Error::from)
        .unwrap_err();

    assert_eq!(
        error,
        Error::LengthExceedsInput {
            declared: 3,
            remaining: 11,
        }
    );
    assert_eq!(code_of(&error), Some("solid::decode::length_exceeds_input".to_string()));
    assert!(error.help().is_some());
}

#[test]
fn removal_is_reported_not_ignored() {
    let list = SolidList::from(vec![1, 2]);
    let mut cursor = list.iterator();
    let error = Error::from(cursor.remove().unwrap_err());
    assert_eq!(
        code_of(&error),
        Some("solid::stream::unsupported_mutation".to_string())
    );
    assert_eq!(error.to_string(), "remove() is not supported by a read-only iterator");
    assert_eq!(SolidList::collect(&list), Ok(SolidList::from([1, 2])));
}

#[test]
fn every_failure_has_its_own_code() {
    let cases = [
        (
            Error::from(StreamError::Exhausted { position: 0 }),
            "solid::stream::exhausted",
        ),
        (
            Error::from(StreamError::UnsupportedMutation { operation: "remove" }),
            "solid::stream::unsupported_mutation",
        ),
        (
            Error::from(StreamError::IndexOutOfBounds { index: 1, len: 0 }),
            "solid::stream::index_out_of_bounds",
        ),
        (
            Error::from(DecodeError::UnexpectedEof {
                what: "list length",
                needed: 8,
                remaining: 0,
            }),
            "solid::decode::unexpected_eof",
        ),
        (
            Error::from(DecodeError::LengthOverflow { declared: u64::MAX }),
            "solid::decode::length_overflow",
        ),
        (
            Error::from(DecodeError::LengthExceedsInput {
                declared: 2,
                remaining: 1,
            }),
            "solid::decode::length_exceeds_input",
        ),
        (Error::from(DecodeError::InvalidBool(2)), "solid::decode::invalid_bool"),
        (Error::from(DecodeError::InvalidChar(0xD800)), "solid::decode::invalid_char"),
        (
            Error::from(DecodeError::InvalidOptionTag(9)),
            "solid::decode::invalid_option_tag",
        ),
        (Error::from(DecodeError::InvalidUtf8), "solid::decode::invalid_utf8"),
        (Error::from(DecodeError::TrailingBytes(1)), "solid::decode::trailing_bytes"),
    ];

    for (error, code) in cases {
        assert_eq!(code_of(&error), Some(code.to_string()));
    }
}

#[test]
fn facade_messages_match_the_layer_errors() {
    let stream = StreamError::IndexOutOfBounds { index: 4, len: 2 };
    assert_eq!(Error::from(stream.clone()).to_string(), stream.to_string());

    let decode = DecodeError::InvalidChar(0xD800);
    assert_eq!(Error::from(decode.clone()).to_string(), decode.to_string());
}
