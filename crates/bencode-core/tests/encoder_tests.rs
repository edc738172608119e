use bencode_core::{encode, encode_to, BencodeError, Dictionary, Value};
use std::io;

fn dict(pairs: &[(&str, Value)]) -> Value {
    pairs.iter().map(|(k, v)| (*k, v.clone())).collect()
}

fn list(items: &[&str]) -> Value {
    Value::List(items.iter().map(|s| Value::from(*s)).collect())
}

/// Encode and compare as text for readable failure messages.
fn assert_encode(value: &Value, expected: &str) {
    let out = encode(value).unwrap();
    assert_eq!(
        String::from_utf8_lossy(&out),
        expected,
        "Encode mismatch for {value:?}"
    );
}

// ============================================================================
// Integers
// ============================================================================

#[test]
fn encode_integers() {
    assert_encode(&Value::Integer(-2), "i-2e");
    assert_encode(&Value::Integer(2), "i2e");
    assert_encode(&Value::Integer(0), "i0e");
}

#[test]
fn encode_integer_extremes() {
    assert_encode(&Value::Integer(i64::MAX), "i9223372036854775807e");
    assert_encode(&Value::Integer(i64::MIN), "i-9223372036854775808e");
}

// ============================================================================
// Byte Strings
// ============================================================================

#[test]
fn encode_byte_strings() {
    assert_encode(&Value::from("test"), "4:test");
    assert_encode(&Value::from("torrent"), "7:torrent");
    assert_encode(&Value::from("a:e"), "3:a:e");
}

#[test]
fn encode_empty_byte_string_emits_nothing() {
    assert_eq!(encode(&Value::ByteString(vec![])).unwrap(), b"");
}

#[test]
fn encode_byte_string_length_counts_bytes_not_chars() {
    // "café" is 5 bytes in UTF-8
    assert_encode(&Value::from("caf\u{e9}"), "5:caf\u{e9}");
}

#[test]
fn encode_binary_byte_string() {
    let out = encode(&Value::ByteString(vec![0x00, 0xff])).unwrap();
    assert_eq!(out, [b'2', b':', 0x00, 0xff]);
}

// ============================================================================
// Lists
// ============================================================================

#[test]
fn encode_lists() {
    assert_encode(
        &Value::List(vec![
            "testing".into(),
            Value::Integer(2),
            dict(&[("a", Value::Integer(1))]),
            Value::List(vec!["pineapple".into(), Value::Integer(0)]),
        ]),
        "l7:testingi2ed1:ai1eel9:pineapplei0eee",
    );
    assert_encode(
        &Value::List(vec![
            "escape".into(),
            Value::Integer(-2),
            dict(&[("c", Value::Integer(3))]),
            Value::List(vec!["testing".into(), Value::Integer(2)]),
        ]),
        "l6:escapei-2ed1:ci3eel7:testingi2eee",
    );
}

#[test]
fn encode_empty_list() {
    assert_encode(&Value::List(vec![]), "le");
}

#[test]
fn encode_list_with_empty_byte_string() {
    // The empty string vanishes from the output entirely
    assert_encode(&list(&["a", "", "b"]), "l1:a1:be");
}

// ============================================================================
// Dictionaries
// ============================================================================

#[test]
fn encode_dictionary_sorts_keys() {
    assert_encode(
        &dict(&[("spam", list(&["a", "b"])), ("cow", Value::from("moo"))]),
        "d3:cow3:moo4:spaml1:a1:bee",
    );
}

#[test]
fn encode_nested_dictionaries() {
    assert_encode(
        &dict(&[
            ("1", dict(&[("test", "nice".into())])),
            ("first", list(&["a", "b", "c"])),
            ("oi", "tchau".into()),
            ("sqrt4", Value::Integer(2)),
        ]),
        "d1:1d4:test4:nicee5:firstl1:a1:b1:ce2:oi5:tchau5:sqrt4i2ee",
    );
    assert_encode(
        &dict(&[
            ("3", dict(&[("come", "here".into())])),
            ("different", "equal".into()),
            ("sqrt64", Value::Integer(8)),
            ("third", list(&["g", "h", "i"])),
        ]),
        "d1:3d4:come4:heree9:different5:equal6:sqrt64i8e5:thirdl1:g1:h1:iee",
    );
}

#[test]
fn encode_empty_dictionary() {
    assert_encode(&dict(&[]), "de");
}

#[test]
fn encode_dictionary_orders_by_raw_bytes() {
    // Uppercase sorts before lowercase; a prefix sorts before its extensions
    assert_encode(
        &dict(&[
            ("b", Value::Integer(1)),
            ("a", Value::Integer(2)),
            ("B", Value::Integer(3)),
            ("ab", Value::Integer(4)),
        ]),
        "d1:Bi3e1:ai2e2:abi4e1:bi1ee",
    );
}

#[test]
fn encode_dictionary_orders_high_bytes_last() {
    let mut map = Dictionary::new();
    map.insert(vec![0xff], Value::Integer(1));
    map.insert(vec![0x7f], Value::Integer(2));
    let out = encode(&Value::Dictionary(map)).unwrap();
    assert_eq!(out, b"d1:\x7fi2e1:\xffi1ee");
}

#[test]
fn encode_dictionary_independent_of_insertion_order() {
    let forward = dict(&[("x", Value::Integer(1)), ("y", Value::Integer(2)), ("z", Value::Integer(3))]);
    let reverse = dict(&[("z", Value::Integer(3)), ("y", Value::Integer(2)), ("x", Value::Integer(1))]);
    assert_eq!(encode(&forward).unwrap(), encode(&reverse).unwrap());
}

// ============================================================================
// Writer Output
// ============================================================================

#[test]
fn encode_to_writer_matches_buffered() {
    let value = dict(&[("cow", "moo".into()), ("n", Value::Integer(7))]);
    let mut out = Vec::new();
    encode_to(&value, &mut out).unwrap();
    assert_eq!(out, encode(&value).unwrap());
}

struct FailingWriter;

impl io::Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn encode_to_failing_writer() {
    let err = encode_to(&Value::from("spam"), &mut FailingWriter).unwrap_err();
    match err {
        BencodeError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("expected Io error, got {other:?}"),
    }
}
