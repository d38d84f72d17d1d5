use webutil::{
    encode_html, file_extension, last_path_component, parent_path, parse_digest_auth,
    path_without_extension, replace, split_path_components,
};

#[test]
fn replace_cases() {
    assert_eq!(replace("", "x", "y"), "");
    assert_eq!(replace("abc", "", "y"), "abc");
    assert_eq!(replace("aaa", "a", "bb"), "bbbbbb");
    assert_eq!(replace("/static/../etc", "../", ""), "/static/etc");
}

#[test]
fn path_cases() {
    assert_eq!(split_path_components("/a/b/", true), ["/", "a", "b", "/"]);
    assert_eq!(last_path_component("/a/b"), "b");
    assert_eq!(last_path_component("/"), "/");
    assert_eq!(parent_path("/a/b"), "/a");
    assert_eq!(parent_path("a"), "");
    assert_eq!(file_extension("/a/b.txt"), "txt");
    assert_eq!(file_extension("/a/.hidden"), "");
    assert_eq!(path_without_extension("/a/b.txt"), "/a/b");
}

#[test]
fn split_and_rejoin_normalizes() {
    for path in ["/a//b///c", "a/b/c/", "//x", "rel//path"] {
        let comps = split_path_components(path, false);
        let joined = comps.join("/");
        let rebuilt = if path.starts_with('/') { format!("/{joined}") } else { joined };
        assert_eq!(split_path_components(&rebuilt, false), comps);
        assert!(!rebuilt.contains("//"), "{rebuilt}");
    }
}

#[test]
fn extension_and_stem_recompose() {
    for path in ["/srv/www/index.html", "notes.tar.gz", "/a/b.c/d.e"] {
        let ext = file_extension(path);
        assert_eq!(format!("{}.{}", path_without_extension(path), ext), path);
    }
}

#[test]
fn parent_of_last_component() {
    let path = "/srv/www/site/index.html";
    let parent = parent_path(path);
    assert_eq!(format!("{}/{}", parent, last_path_component(path)), path);
}

#[test]
fn digest_cases() {
    let auth = parse_digest_auth(r#"Digest username="bob", nonce="xyz""#);
    assert_eq!(auth.get("username"), Some("bob"));
    assert_eq!(auth.get("nonce"), Some("xyz"));
    assert!(parse_digest_auth(r#"Bearer username="bob""#).is_empty());
}

#[test]
fn html_escapes_markup() {
    assert_eq!(encode_html("<script>alert('x')</script>"),
        "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;");
}
