use crate::error::{CommitKitError, Result};
use git2::{build::CheckoutBuilder, BranchType, ErrorCode, Repository as Git2Repo};
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
    /// Directory relative paths passed to [`stage_paths`](super::Repository::stage_paths) start from
    base: PathBuf,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path.as_ref())?;
        let base = path.as_ref().canonicalize()?;

        Ok(Git2Repository { repo, base })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo, base: PathBuf) -> Self {
        Git2Repository { repo, base }
    }

    fn head_tree(&self) -> Result<Option<git2::Tree<'_>>> {
        match self.repo.head() {
            Ok(head) => Ok(Some(head.peel_to_tree()?)),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn fetch_options<'a>() -> git2::FetchOptions<'a> {
        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                let user = username_from_url.unwrap_or("git");
                if let Ok(cred) = git2::Cred::ssh_key_from_agent(user) {
                    return Ok(cred);
                }

                if let Some(home) = dirs::home_dir() {
                    for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                        let path = home.join(".ssh").join(key);
                        if path.exists() {
                            if let Ok(cred) = git2::Cred::ssh_key(user, None, &path, None) {
                                return Ok(cred);
                            }
                        }
                    }
                }
            }

            git2::Cred::default()
        });

        let mut fetch_options = git2::FetchOptions::new();
        fetch_options.remote_callbacks(callbacks);
        fetch_options
    }
}

impl super::Repository for Git2Repository {
    fn commit_message_path(&self) -> PathBuf {
        self.repo.path().join("COMMIT_EDITMSG")
    }

    fn staged_paths(&self) -> Result<Vec<String>> {
        let index = self.repo.index()?;
        let head_tree = self.head_tree()?;
        let diff = self
            .repo
            .diff_tree_to_index(head_tree.as_ref(), Some(&index), None)?;

        let paths = diff
            .deltas()
            .filter_map(|delta| {
                delta
                    .new_file()
                    .path()
                    .or_else(|| delta.old_file().path())
                    .map(|p| p.to_string_lossy().into_owned())
            })
            .collect();
        Ok(paths)
    }

    fn stage_paths(&self, paths: &[String]) -> Result<()> {
        let workdir = self
            .repo
            .workdir()
            .ok_or_else(|| CommitKitError::repository("Cannot stage files in a bare repository"))?
            .canonicalize()?;

        let mut index = self.repo.index()?;
        for path in paths {
            let absolute = self.base.join(path).canonicalize()?;
            let relative = absolute.strip_prefix(&workdir).map_err(|_| {
                CommitKitError::repository(format!("{} is outside the repository", path))
            })?;
            tracing::debug!(path = %relative.display(), "staging");
            index.add_path(relative)?;
        }
        index.write()?;
        Ok(())
    }

    fn has_commits(&self) -> Result<bool> {
        match self.repo.head() {
            Ok(head) => Ok(head.target().is_some()),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                Ok(false)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn create_annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        let tagger = self.repo.signature()?;
        self.repo
            .tag(name, head.as_object(), &tagger, message, false)?;
        Ok(())
    }

    fn current_branch(&self) -> Result<Option<String>> {
        match self.repo.head() {
            Ok(head) if head.is_branch() => Ok(head.shorthand().map(str::to_string)),
            Ok(_) => Ok(None),
            Err(e) if e.code() == ErrorCode::UnbornBranch => {
                // No commits yet, HEAD still names the branch it will create
                let head = self.repo.find_reference("HEAD")?;
                Ok(head
                    .symbolic_target()
                    .and_then(|target| target.strip_prefix("refs/heads/"))
                    .map(str::to_string))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn checkout_branch(&self, name: &str) -> Result<()> {
        let branch = self
            .repo
            .find_branch(name, BranchType::Local)
            .map_err(|e| CommitKitError::branch(format!("Cannot find branch '{}': {}", name, e)))?;
        let refname = branch
            .get()
            .name()
            .ok_or_else(|| CommitKitError::branch(format!("Branch '{}' has no name", name)))?
            .to_string();

        let target = branch.get().peel(git2::ObjectType::Commit)?;
        self.repo
            .checkout_tree(&target, Some(CheckoutBuilder::new().safe()))?;
        self.repo.set_head(&refname)?;
        Ok(())
    }

    fn pull(&self, remote_name: &str, branch_name: &str) -> Result<()> {
        let mut remote = self.repo.find_remote(remote_name).map_err(|_| {
            CommitKitError::branch(format!("Remote '{}' not found", remote_name))
        })?;

        let refspec = format!(
            "+refs/heads/{}:refs/remotes/{}/{}",
            branch_name, remote_name, branch_name
        );
        remote.fetch(&[refspec.as_str()], Some(&mut Self::fetch_options()), None)?;

        let tracking = format!("refs/remotes/{}/{}", remote_name, branch_name);
        let remote_oid = self.repo.find_reference(&tracking)?.target().ok_or_else(|| {
            CommitKitError::branch(format!("Remote reference {} is invalid", tracking))
        })?;

        let mut local = self.repo.find_branch(branch_name, BranchType::Local)?;
        let local_oid = match local.get().target() {
            Some(oid) => oid,
            None => return Ok(()),
        };

        if local_oid == remote_oid {
            return Ok(());
        }

        if !self.repo.graph_descendant_of(remote_oid, local_oid)? {
            tracing::warn!(branch = branch_name, "local branch diverged, not fast-forwarding");
            return Ok(());
        }

        if local.is_head() {
            let commit = self.repo.find_commit(remote_oid)?;
            self.repo
                .checkout_tree(commit.as_object(), Some(CheckoutBuilder::new().safe()))?;
        }

        local.get_mut().set_target(
            remote_oid,
            &format!("fast-forward from {}/{}", remote_name, branch_name),
        )?;
        Ok(())
    }

    fn create_branch(&self, name: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        let branch = self.repo.branch(name, &head, false)?;
        let refname = branch
            .get()
            .name()
            .ok_or_else(|| CommitKitError::branch(format!("Branch '{}' has no name", name)))?
            .to_string();
        self.repo.set_head(&refname)?;
        Ok(())
    }
}
