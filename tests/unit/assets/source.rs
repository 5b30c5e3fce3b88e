use super::*;

#[test]
fn normalize_path_slash_normalization() {
    assert_eq!(normalize_rel_path("a/b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("a\\b.png").unwrap(), "a/b.png");
    assert_eq!(normalize_rel_path("./a//b.png").unwrap(), "a/b.png");
    assert!(normalize_rel_path("../x.png").is_err());
    assert!(normalize_rel_path("/abs.png").is_err());
    assert!(normalize_rel_path("").is_err());
    assert!(normalize_rel_path("./.").is_err());
}

#[test]
fn memory_source_returns_registered_bytes() {
    let src = MemoryAssetSource::new().with("brick.png", vec![1, 2, 3]);
    assert_eq!(src.fetch("brick.png").unwrap(), vec![1, 2, 3]);
    assert!(src.fetch("missing.png").is_err());
}

#[test]
fn fs_source_reads_relative_files_only() {
    let dir = PathBuf::from("target").join("fs_asset_source");
    std::fs::create_dir_all(dir.join("tex")).unwrap();
    std::fs::write(dir.join("tex").join("a.bin"), [7u8, 8, 9]).unwrap();

    let src = FsAssetSource::new(&dir);
    assert_eq!(src.root(), dir.as_path());
    assert_eq!(src.fetch("tex/a.bin").unwrap(), vec![7, 8, 9]);
    assert_eq!(src.fetch("./tex\\a.bin").unwrap(), vec![7, 8, 9]);
    assert!(src.fetch("tex/missing.bin").is_err());
    assert!(src.fetch("../fs_asset_source/tex/a.bin").is_err());
}
