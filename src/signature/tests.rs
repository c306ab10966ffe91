use super::{validate_signature, Signature, Type, MAX_SIGNATURE};

use crate::validity::Invalid::*;

macro_rules! test {
    ($input:expr, $expected:pat) => {{
        let actual = validate_signature($input);

        assert!(
            matches!(actual, $expected),
            "{actual:?} does not match {}",
            stringify!($expected)
        );
    }};
}

#[test]
fn signature_tests() {
    test!(b"", Ok(..));
    test!(b"sss", Ok(..));
    test!(b"i", Ok(..));
    test!(b"b", Ok(..));
    test!(b"ai", Ok(..));
    test!(b"(i)", Ok(..));
    test!(b"v", Ok(..));
    test!(b"av", Ok(..));
    test!(b"a(iv)", Ok(..));
    test!(b"w", Err(UnknownTypeCode(..)));
    test!(b"r", Err(UnknownTypeCode(..)));
    test!(b"n", Err(UnknownTypeCode(..)));
    test!(b"a{sv}", Err(UnknownTypeCode(..)));
    test!(b"a", Err(MissingArrayElementType));
    test!(b"aaaaaa", Err(MissingArrayElementType));
    test!(b"ii(ii)a", Err(MissingArrayElementType));
    test!(b"ia", Err(MissingArrayElementType));
    test!(b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaai", Ok(..));
    test!(
        b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaai",
        Err(ExceededMaximumArrayRecursion)
    );
    test!(b")", Err(StructEndedButNotStarted));
    test!(b"i)", Err(StructEndedButNotStarted));
    // The array counter tracks consecutive markers only, so the struct
    // close is what gets reported here.
    test!(b"a)", Err(StructEndedButNotStarted));
    test!(b"(", Err(StructStartedButNotEnded));
    test!(b"(i", Err(StructStartedButNotEnded));
    test!(b"(iiiii", Err(StructStartedButNotEnded));
    test!(b"(ai", Err(StructStartedButNotEnded));
    test!(b"()", Err(StructHasNoFields));
    test!(b"(())", Err(StructHasNoFields));
    test!(b"a()", Err(StructHasNoFields));
    test!(b"i()", Err(StructHasNoFields));
    test!(b"()i", Err(StructHasNoFields));
    test!(b" ", Err(UnknownTypeCode(..)));
    test!(b"not a valid signature", Err(UnknownTypeCode(..)));
    test!(b"123", Err(UnknownTypeCode(..)));
    test!(b".", Err(UnknownTypeCode(..)));
    test!(&[b'i'; 255], Ok(..));
    test!(&[b'i'; MAX_SIGNATURE + 1], Err(SignatureTooLong));
    test! {
        b"((((((((((((((((((((((((((((((((ii))))))))))))))))))))))))))))))))",
        Ok(..)
    };
    test! {
        b"(((((((((((((((((((((((((((((((((ii))))))))))))))))))))))))))))))))",
        Err(ExceededMaximumStructRecursion)
    };
}

#[test]
fn wrapper_agrees_with_validation() {
    assert!(Signature::new(b"a(iv)").is_ok());
    assert_eq!(Signature::new(b"a").err(), Some(MissingArrayElementType));
    assert_eq!(Signature::new(&[b'y'; 256]).err(), Some(SignatureTooLong));
}

#[test]
fn test_iter() {
    let s = Signature::new_const(b"aaa(as)yu(i(tv))");

    let mut it1 = s.iter();

    let Some(Type::Array(s2)) = it1.next() else {
        panic!("expected outer array");
    };

    assert_eq!(s2, "aa(as)");

    let Some(Type::Array(s3)) = s2.iter().next() else {
        panic!("expected inner array");
    };

    assert_eq!(s3, "a(as)");

    let Some(Type::Array(s4)) = s3.iter().next() else {
        panic!("expected innermost array");
    };

    assert_eq!(s4, "(as)");

    let Some(Type::Struct(s5)) = s4.iter().next() else {
        panic!("expected struct: {:?}", s4.iter().next());
    };

    assert_eq!(s5, "as");

    assert_eq!(it1.next(), Some(Type::Signature(Signature::BYTE)));
    assert_eq!(it1.next(), Some(Type::Signature(Signature::UINT32)));

    let Some(Type::Struct(s6)) = it1.next() else {
        panic!("expected trailing struct");
    };

    assert_eq!(s6, "i(tv)");
    assert!(it1.next().is_none());
}
