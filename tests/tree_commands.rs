use assert_cmd::Command;
use assert_fs::fixture::{FileWriteStr, PathChild};
use assert_fs::prelude::PathCreateDir;
use predicates::prelude::predicate;

mod common;

#[test]
fn write_tree_snapshots_a_file_and_an_empty_directory() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    let mut cmd = Command::cargo_bin("nit")?;
    cmd.current_dir(dir.path()).arg("init");

    cmd.assert().success().stdout(predicate::str::contains(
        "Initialized empty Git repository in",
    ));

    dir.child("a.txt").write_str("x")?;
    dir.child("sub").create_dir_all()?;

    let mut sut = Command::cargo_bin("nit")?;
    sut.current_dir(dir.path()).arg("write-tree");

    sut.assert()
        .success()
        .stdout(predicate::eq("b82156768bf012710817a9dbedc9d920bd5885bf\n"));

    // the blob, the empty subtree and the root tree are all stored
    for oid in [
        "c1b0730e0133447badcfd47fd144e254807b06e1",
        "4b825dc642cb6eb9a060e54bf8d69288fbee4904",
        "b82156768bf012710817a9dbedc9d920bd5885bf",
    ] {
        let stored = dir.path().join(".git/objects").join(&oid[..2]).join(&oid[2..]);
        assert!(stored.is_file(), "missing object {oid}");
    }

    Ok(())
}

#[test]
fn write_tree_for_a_nested_project() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    let mut cmd = Command::cargo_bin("nit")?;
    cmd.current_dir(dir.path()).arg("init");

    cmd.assert().success().stdout(predicate::str::contains(
        "Initialized empty Git repository in",
    ));

    dir.child("README.md").write_str("hello\n")?;
    dir.child("src/main.c").write_str("int main() { return 0; }\n")?;

    let mut sut = Command::cargo_bin("nit")?;
    sut.current_dir(dir.path()).arg("write-tree");

    sut.assert()
        .success()
        .stdout(predicate::eq("73a93f15fb8acf2ebf9849f7afafcb4e5e70690d\n"));

    let mut ls_tree = Command::cargo_bin("nit")?;
    ls_tree
        .current_dir(dir.path())
        .arg("ls-tree")
        .arg("73a93f15fb8acf2ebf9849f7afafcb4e5e70690d");

    ls_tree
        .assert()
        .success()
        .stdout(predicate::eq("100644 README.md\n40000 src\n"));

    Ok(())
}

#[test]
fn write_tree_ignores_the_metadata_directory() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    let mut cmd = Command::cargo_bin("nit")?;
    cmd.current_dir(dir.path()).arg("init");

    cmd.assert().success().stdout(predicate::str::contains(
        "Initialized empty Git repository in",
    ));

    // nothing but .git in the workspace, so the snapshot is the empty tree
    let mut sut = Command::cargo_bin("nit")?;
    sut.current_dir(dir.path()).arg("write-tree");

    sut.assert()
        .success()
        .stdout(predicate::eq("4b825dc642cb6eb9a060e54bf8d69288fbee4904\n"));

    Ok(())
}

#[test]
fn ls_tree_lists_entries_in_byte_order() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    let mut cmd = Command::cargo_bin("nit")?;
    cmd.current_dir(dir.path()).arg("init");

    cmd.assert().success().stdout(predicate::str::contains(
        "Initialized empty Git repository in",
    ));

    dir.child("a.txt").write_str("a\n")?;
    dir.child("B.txt").write_str("B\n")?;

    let mut write_tree = Command::cargo_bin("nit")?;
    write_tree.current_dir(dir.path()).arg("write-tree");

    // uppercase names sort before lowercase ones in byte order
    write_tree
        .assert()
        .success()
        .stdout(predicate::eq("ee023acd7a84a73e92268eb47712e5e54bca9c94\n"));

    let mut sut = Command::cargo_bin("nit")?;
    sut.current_dir(dir.path())
        .arg("ls-tree")
        .arg("ee023acd7a84a73e92268eb47712e5e54bca9c94");

    sut.assert()
        .success()
        .stdout(predicate::eq("100644 B.txt\n100644 a.txt\n"));

    Ok(())
}

#[test]
fn write_tree_is_stable_across_reruns() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    let mut cmd = Command::cargo_bin("nit")?;
    cmd.current_dir(dir.path()).arg("init");

    cmd.assert().success().stdout(predicate::str::contains(
        "Initialized empty Git repository in",
    ));

    dir.child("README.md").write_str("hello\n")?;

    let mut first = Command::cargo_bin("nit")?;
    first.current_dir(dir.path()).arg("write-tree");
    let first_oid = first.assert().success().get_output().stdout.clone();

    let mut second = Command::cargo_bin("nit")?;
    second.current_dir(dir.path()).arg("write-tree");
    let second_oid = second.assert().success().get_output().stdout.clone();

    assert_eq!(first_oid, second_oid);

    Ok(())
}

#[cfg(unix)]
#[test]
fn write_tree_stores_an_executable_file_as_regular() -> Result<(), Box<dyn std::error::Error>> {
    use std::os::unix::fs::PermissionsExt;

    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    let mut cmd = Command::cargo_bin("nit")?;
    cmd.current_dir(dir.path()).arg("init");

    cmd.assert().success().stdout(predicate::str::contains(
        "Initialized empty Git repository in",
    ));

    dir.child("run.sh").write_str("hello\n")?;
    std::fs::set_permissions(
        dir.path().join("run.sh"),
        std::fs::Permissions::from_mode(0o755),
    )?;

    let mut write_tree = Command::cargo_bin("nit")?;
    write_tree.current_dir(dir.path()).arg("write-tree");
    let tree_oid_raw = write_tree
        .assert()
        .success()
        .get_output()
        .stdout
        .trim_ascii()
        .to_vec();
    let tree_oid = String::from_utf8(tree_oid_raw)?;

    let mut sut = Command::cargo_bin("nit")?;
    sut.current_dir(dir.path())
        .arg("cat-file")
        .arg("-p")
        .arg(&tree_oid);

    // the executable bit is not recorded, every file snapshots as 100644
    sut.assert().success().stdout(predicate::eq(
        "100644 blob ce013625030ba8dba906f756967f9e9ca394464a\trun.sh\n",
    ));

    Ok(())
}

#[cfg(unix)]
#[test]
fn write_tree_reads_blob_bytes_through_a_file_symlink() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    let mut cmd = Command::cargo_bin("nit")?;
    cmd.current_dir(dir.path()).arg("init");

    cmd.assert().success().stdout(predicate::str::contains(
        "Initialized empty Git repository in",
    ));

    dir.child("target.txt").write_str("hello\n")?;
    std::os::unix::fs::symlink("target.txt", dir.path().join("link.txt"))?;

    let mut write_tree = Command::cargo_bin("nit")?;
    write_tree.current_dir(dir.path()).arg("write-tree");
    let tree_oid_raw = write_tree
        .assert()
        .success()
        .get_output()
        .stdout
        .trim_ascii()
        .to_vec();
    let tree_oid = String::from_utf8(tree_oid_raw)?;

    let mut sut = Command::cargo_bin("nit")?;
    sut.current_dir(dir.path())
        .arg("cat-file")
        .arg("-p")
        .arg(&tree_oid);

    // the link is read through, so both entries carry the target's blob id
    sut.assert().success().stdout(predicate::eq(
        "100644 blob ce013625030ba8dba906f756967f9e9ca394464a\tlink.txt\n\
         100644 blob ce013625030ba8dba906f756967f9e9ca394464a\ttarget.txt\n",
    ));

    Ok(())
}

#[cfg(unix)]
#[test]
fn write_tree_aborts_on_an_unreadable_child_and_keeps_stored_orphans()
-> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    let mut cmd = Command::cargo_bin("nit")?;
    cmd.current_dir(dir.path()).arg("init");

    cmd.assert().success().stdout(predicate::str::contains(
        "Initialized empty Git repository in",
    ));

    // a.txt sorts before the dangling link, so its blob lands before the abort
    dir.child("a.txt").write_str("hello\n")?;
    std::os::unix::fs::symlink("missing-target", dir.path().join("broken"))?;

    let mut sut = Command::cargo_bin("nit")?;
    sut.current_dir(dir.path()).arg("write-tree");

    sut.assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));

    let orphan = dir
        .path()
        .join(".git/objects/ce/013625030ba8dba906f756967f9e9ca394464a");
    assert!(orphan.is_file());

    // the orphaned blob is the only object; no tree was stored
    let mut object_count = 0;
    for fanout in std::fs::read_dir(dir.path().join(".git/objects"))? {
        let fanout = fanout?.path();
        if fanout.is_dir() {
            object_count += std::fs::read_dir(fanout)?.count();
        }
    }
    assert_eq!(object_count, 1);

    Ok(())
}

#[test]
fn cat_file_pretty_prints_a_tree() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    let mut cmd = Command::cargo_bin("nit")?;
    cmd.current_dir(dir.path()).arg("init");

    cmd.assert().success().stdout(predicate::str::contains(
        "Initialized empty Git repository in",
    ));

    dir.child("README.md").write_str("hello\n")?;
    dir.child("src/main.c").write_str("int main() { return 0; }\n")?;

    let mut write_tree = Command::cargo_bin("nit")?;
    write_tree.current_dir(dir.path()).arg("write-tree");
    write_tree.assert().success();

    let mut sut = Command::cargo_bin("nit")?;
    sut.current_dir(dir.path())
        .arg("cat-file")
        .arg("-p")
        .arg("73a93f15fb8acf2ebf9849f7afafcb4e5e70690d");

    sut.assert().success().stdout(predicate::eq(
        "100644 blob ce013625030ba8dba906f756967f9e9ca394464a\tREADME.md\n\
         40000 tree f67bc41327fe605a56df4f06537f1f182637de86\tsrc\n",
    ));

    Ok(())
}

#[test]
fn ls_tree_rejects_a_blob_object() -> Result<(), Box<dyn std::error::Error>> {
    common::redirect_temp_dir();
    let dir = assert_fs::TempDir::new()?;
    let mut cmd = Command::cargo_bin("nit")?;
    cmd.current_dir(dir.path()).arg("init");

    cmd.assert().success().stdout(predicate::str::contains(
        "Initialized empty Git repository in",
    ));

    dir.child("abc.txt").write_str("abc")?;

    let mut hash_cmd = Command::cargo_bin("nit")?;
    hash_cmd
        .current_dir(dir.path())
        .arg("hash-object")
        .arg("-w")
        .arg("abc.txt");
    hash_cmd.assert().success();

    let mut sut = Command::cargo_bin("nit")?;
    sut.current_dir(dir.path())
        .arg("ls-tree")
        .arg("f2ba8f84ab5c1bce84a7b441cb1959cfc7093b7f");

    sut.assert()
        .failure()
        .stderr(predicate::str::contains("not a tree object"));

    Ok(())
}
