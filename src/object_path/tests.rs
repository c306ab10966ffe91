use super::ObjectPath;

#[test]
fn legal_paths() {
    assert!(ObjectPath::new(b"").is_err());
    assert!(ObjectPath::new(b"a").is_err());
    assert!(ObjectPath::new(b"a/b").is_err());
    assert!(ObjectPath::new(b"/").is_ok());
    assert!(ObjectPath::new(b"/a").is_ok());
    assert!(ObjectPath::new(b"//").is_err());
    assert!(ObjectPath::new(b"/a//b").is_err());
    assert!(ObjectPath::new(b"/a/b/c").is_ok());
    assert!(ObjectPath::new(b"/se/tedro").is_ok());
    assert!(ObjectPath::new(b"/se/tedro/").is_err());
    assert!(ObjectPath::new(b"/_/under_score0").is_ok());
    assert!(ObjectPath::new(b"/with-dash").is_err());
    assert!(ObjectPath::new(b"/with.dot").is_err());
    assert!(ObjectPath::new("/d\u{e9}j\u{e0}".as_bytes()).is_err());
}

#[test]
fn components() {
    let path = ObjectPath::new_const(b"/org/freedesktop/DBus");

    let mut it = path.iter();
    assert_eq!(it.next(), Some("org"));
    assert_eq!(it.next(), Some("freedesktop"));
    assert_eq!(it.next(), Some("DBus"));
    assert!(it.next().is_none());

    let mut it = path.iter();
    assert_eq!(it.next_back(), Some("DBus"));
    assert_eq!(it.next(), Some("org"));
    assert_eq!(it.next_back(), Some("freedesktop"));
    assert!(it.next().is_none());
}
