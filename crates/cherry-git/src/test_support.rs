//! Test helpers for building repositories, branches, and commits.
//!
//! These wrap git2 so tests in other crates never import git2 directly.
//! Commits are written straight to branch refs; the working tree is not
//! touched.

use std::path::Path;

use git2::{Commit, ObjectType, Oid, Repository, Signature};

use crate::errors::GitError;

fn signature() -> Result<Signature<'static>, GitError> {
    Ok(Signature::now("Test", "test@test.com")?)
}

/// Initialize a new git repository at the given path with an initial commit.
pub fn init_repo_with_commit(path: &Path) -> Result<(), GitError> {
    let repo = Repository::init(path)?;
    let sig = signature()?;
    let tree_id = repo.index()?.write_tree()?;
    let tree = repo.find_tree(tree_id)?;
    repo.commit(Some("HEAD"), &sig, &sig, "Initial commit", &tree, &[])?;
    Ok(())
}

/// Create a local branch pointing at HEAD.
pub fn create_branch(path: &Path, name: &str) -> Result<(), GitError> {
    let repo = Repository::open(path)?;
    let commit = repo.head()?.peel_to_commit()?;
    repo.branch(name, &commit, false)?;
    Ok(())
}

/// Tree of `parent` with the top-level file `file` set to `content`.
fn tree_with_file(
    repo: &Repository,
    parent: &Commit<'_>,
    file: &str,
    content: &str,
) -> Result<Oid, GitError> {
    let blob = repo.blob(content.as_bytes())?;
    let mut builder = repo.treebuilder(Some(&parent.tree()?))?;
    builder.insert(file, blob, 0o100644)?;
    Ok(builder.write()?)
}

/// Add a commit on top of `branch` that writes `content` to the top-level
/// file `file`. Returns the full hex id of the new commit.
pub fn commit_on_branch(
    path: &Path,
    branch: &str,
    file: &str,
    content: &str,
    message: &str,
) -> Result<String, GitError> {
    let repo = Repository::open(path)?;
    let refname = format!("refs/heads/{branch}");
    let parent = repo.find_reference(&refname)?.peel_to_commit()?;
    let tree = repo.find_tree(tree_with_file(&repo, &parent, file, content)?)?;

    let sig = signature()?;
    let oid = repo.commit(Some(refname.as_str()), &sig, &sig, message, &tree, &[&parent])?;
    Ok(oid.to_string())
}

/// Like [`commit_on_branch`], but writes the raw commit object so the message
/// can be stored in a legacy `encoding` such as ISO-8859-1.
pub fn commit_on_branch_with_encoding(
    path: &Path,
    branch: &str,
    file: &str,
    content: &str,
    message: &[u8],
    encoding: &str,
) -> Result<String, GitError> {
    let repo = Repository::open(path)?;
    let refname = format!("refs/heads/{branch}");
    let parent = repo.find_reference(&refname)?.peel_to_commit()?;
    let tree_id = tree_with_file(&repo, &parent, file, content)?;

    let mut raw = format!(
        "tree {tree_id}\n\
         parent {}\n\
         author Test <test@test.com> 1700000000 +0000\n\
         committer Test <test@test.com> 1700000000 +0000\n\
         encoding {encoding}\n\n",
        parent.id()
    )
    .into_bytes();
    raw.extend_from_slice(message);

    let oid = repo.odb()?.write(ObjectType::Commit, &raw)?;
    repo.reference(&refname, oid, true, "test commit with encoding header")?;
    Ok(oid.to_string())
}

/// Point HEAD at an existing local branch without touching the working tree.
pub fn set_head_branch(path: &Path, branch: &str) -> Result<(), GitError> {
    let repo = Repository::open(path)?;
    repo.set_head(&format!("refs/heads/{branch}"))?;
    Ok(())
}
