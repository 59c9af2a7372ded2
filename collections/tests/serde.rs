#![cfg(feature = "serde")]

use pretty_assertions::assert_eq;
use solid_collections::SolidList;

#[test]
fn postcard_round_trip() {
    let list = SolidList::from(vec![String::from("a"), String::from("bc")]);
    let bytes = postcard::to_allocvec(&list).unwrap();
    let decoded: SolidList<String> = postcard::from_bytes(&bytes).unwrap();
    assert_eq!(decoded, list);
}

#[test]
fn serializes_as_a_plain_sequence() {
    let list = SolidList::from([1u8, 2, 3]);
    assert_eq!(
        postcard::to_allocvec(&list).unwrap(),
        postcard::to_allocvec(&vec![1u8, 2, 3]).unwrap()
    );
}
