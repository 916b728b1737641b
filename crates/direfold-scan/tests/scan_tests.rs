use std::fs;
use std::path::Path;

use direfold_scan::{ScanConfig, ScanResult, TreeScanner};
use tempfile::TempDir;

fn scan(root: &Path) -> ScanResult {
    TreeScanner::new()
        .scan(&ScanConfig::new(root))
        .unwrap()
        .result
}

#[test]
fn test_files_and_empty_subdirectory() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("a.txt"), vec![b'a'; 10]).unwrap();
    fs::write(temp.path().join("b.txt"), vec![b'b'; 20]).unwrap();
    fs::create_dir(temp.path().join("sub")).unwrap();

    let result = scan(temp.path());
    assert_eq!(result.dir_count, 2);
    assert_eq!(result.file_count, 2);
    assert_eq!(result.total_bytes, 30);
}

#[test]
fn test_flat_directory_sums_sizes() {
    let temp = TempDir::new().unwrap();
    let sizes = [0usize, 1, 512, 4096, 70_000];
    for (i, size) in sizes.iter().enumerate() {
        fs::write(temp.path().join(format!("f{i}.bin")), vec![0u8; *size]).unwrap();
    }

    let result = scan(temp.path());
    assert_eq!(result.file_count, sizes.len() as u64);
    assert_eq!(result.dir_count, 1);
    assert_eq!(result.total_bytes, sizes.iter().sum::<usize>() as u64);
}

#[test]
fn test_scan_is_idempotent() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("x/y/z")).unwrap();
    fs::write(temp.path().join("x/one"), "1").unwrap();
    fs::write(temp.path().join("x/y/two"), "22").unwrap();
    fs::write(temp.path().join("x/y/z/three"), "333").unwrap();

    let first = scan(temp.path());
    let second = scan(temp.path());
    assert_eq!(first, second);
    assert_eq!(first.dir_count, 4);
    assert_eq!(first.total_bytes, 6);
}

#[test]
fn test_skipped_subtree_contributes_nothing() {
    let temp = TempDir::new().unwrap();
    let virt = temp.path().join("virt");
    fs::create_dir_all(virt.join("deep/deeper")).unwrap();
    fs::write(virt.join("deep/deeper/big"), vec![0u8; 10_000]).unwrap();
    fs::write(temp.path().join("kept"), "abc").unwrap();

    let prefix = format!("{}/", virt.display());
    let config = ScanConfig::builder()
        .root(temp.path())
        .skip_prefixes(vec![prefix])
        .build()
        .unwrap();
    let result = TreeScanner::new().scan(&config).unwrap().result;

    // `virt` itself does not start with `virt/`, so only its contents vanish.
    assert_eq!(result.dir_count, 2);
    assert_eq!(result.file_count, 1);
    assert_eq!(result.total_bytes, 3);
}

#[test]
fn test_root_under_skip_prefix_is_empty() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("file"), "data").unwrap();

    let config = ScanConfig::builder()
        .root(temp.path())
        .skip_prefixes(vec![temp.path().to_string_lossy().into_owned()])
        .build()
        .unwrap();
    let report = TreeScanner::new().scan(&config).unwrap();

    assert_eq!(report.result, ScanResult::default());
}

#[test]
fn test_root_may_be_a_file() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("single");
    fs::write(&file, vec![1u8; 42]).unwrap();

    let result = scan(&file);
    assert_eq!(result.file_count, 1);
    assert_eq!(result.dir_count, 0);
    assert_eq!(result.total_bytes, 42);
}

#[cfg(unix)]
#[test]
fn test_symlinks_are_not_counted_or_followed() {
    use std::os::unix::fs::symlink;

    let temp = TempDir::new().unwrap();
    let outside = TempDir::new().unwrap();
    fs::write(outside.path().join("payload"), vec![0u8; 1000]).unwrap();

    fs::write(temp.path().join("real"), "12345").unwrap();
    symlink(temp.path().join("real"), temp.path().join("file-link")).unwrap();
    symlink(outside.path(), temp.path().join("dir-link")).unwrap();
    symlink(temp.path().join("nowhere"), temp.path().join("broken-link")).unwrap();

    let result = scan(temp.path());
    assert_eq!(result.file_count, 1);
    assert_eq!(result.dir_count, 1);
    assert_eq!(result.total_bytes, 5);
}

#[cfg(unix)]
#[test]
fn test_symlinked_root_counts_nothing_by_default() {
    use std::os::unix::fs::symlink;

    let target = TempDir::new().unwrap();
    fs::write(target.path().join("inside"), "xy").unwrap();
    let holder = TempDir::new().unwrap();
    let link = holder.path().join("root-link");
    symlink(target.path(), &link).unwrap();

    assert_eq!(scan(&link), ScanResult::default());

    let config = ScanConfig::builder()
        .root(&link)
        .follow_root_links(true)
        .build()
        .unwrap();
    let followed = TreeScanner::new().scan(&config).unwrap().result;
    assert_eq!(followed.dir_count, 1);
    assert_eq!(followed.file_count, 1);
    assert_eq!(followed.total_bytes, 2);
}

#[cfg(unix)]
#[test]
fn test_link_into_skipped_tree_is_not_walked() {
    use std::os::unix::fs::symlink;

    // Mirrors `/var/run -> /run`: the link path matches no skip prefix.
    let virt = TempDir::new().unwrap();
    fs::create_dir(virt.path().join("lock")).unwrap();
    fs::write(virt.path().join("lock/pid"), "1234").unwrap();
    let holder = TempDir::new().unwrap();
    let link = holder.path().join("run");
    symlink(virt.path(), &link).unwrap();

    let config = ScanConfig::builder()
        .root(&link)
        .skip_prefixes(vec![format!("{}/", virt.path().display())])
        .build()
        .unwrap();
    let report = TreeScanner::new().scan(&config).unwrap();

    assert_eq!(report.result, ScanResult::default());
}

#[cfg(unix)]
#[test]
fn test_permission_denied_is_tolerated() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let locked = temp.path().join("locked");
    fs::create_dir(&locked).unwrap();
    fs::write(locked.join("secret"), vec![0u8; 100]).unwrap();
    fs::create_dir(temp.path().join("open")).unwrap();
    fs::write(temp.path().join("open/visible"), "seen").unwrap();
    fs::write(temp.path().join("top"), "t").unwrap();

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users read through mode 000; nothing to observe then.
    if fs::read_dir(&locked).is_ok() {
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let report = TreeScanner::new().scan(&ScanConfig::new(temp.path()));
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    let report = report.unwrap();

    // root + open; the unreadable directory and its contents are left out.
    assert_eq!(report.dir_count(), 2);
    assert_eq!(report.file_count(), 2);
    assert_eq!(report.total_bytes(), 5);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].path, locked);
}
