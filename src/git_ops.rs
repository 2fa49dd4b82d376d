use anyhow::{Context, Result};
use git2::{Repository, Signature, Time};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Git operations handler for automatic version control of the data file
pub struct GitOps {
    repo: Option<Arc<Mutex<Repository>>>,
}

impl GitOps {
    /// Create a new GitOps instance by detecting if the path is in a git repository
    ///
    /// Discovery starts from the data file's directory so it also works
    /// before the file itself has been written for the first time.
    pub fn new(file_path: &Path) -> Self {
        let file_dir = match file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let repo = Repository::discover(&file_dir)
            .ok()
            .map(|r| Arc::new(Mutex::new(r)));
        Self { repo }
    }

    /// Check if the data file is under git version control
    pub fn is_git_managed(&self) -> bool {
        self.repo.is_some()
    }

    /// Pull changes from the remote repository
    ///
    /// Only fast-forward merges are applied; anything needing a real
    /// merge is reported as an error to resolve manually.
    pub fn pull(&self) -> Result<()> {
        let repo = match &self.repo {
            Some(r) => r.lock().unwrap(),
            None => return Ok(()), // Not a git repo, skip
        };

        let head = repo.head().context("Failed to get HEAD")?;
        let branch_name = head
            .shorthand()
            .context("Failed to get branch name")?
            .to_string();

        let mut remote = repo
            .find_remote("origin")
            .context("Failed to find remote 'origin'")?;

        remote
            .fetch(&[&branch_name], None, None)
            .context("Failed to fetch from origin")?;

        let fetch_head = repo.find_reference("FETCH_HEAD")?;
        let fetch_commit = repo.reference_to_annotated_commit(&fetch_head)?;

        let (analysis, _) = repo.merge_analysis(&[&fetch_commit])?;

        if analysis.is_up_to_date() {
            return Ok(());
        }

        if analysis.is_fast_forward() {
            let refname = format!("refs/heads/{}", branch_name);
            let mut reference = repo.find_reference(&refname)?;
            reference.set_target(fetch_commit.id(), "Fast-forward")?;
            repo.set_head(&refname)?;
            repo.checkout_head(Some(git2::build::CheckoutBuilder::default().force()))?;
        } else if analysis.is_normal() {
            return Err(anyhow::anyhow!(
                "Merge required but automatic merge is not supported. Please resolve manually."
            ));
        }

        Ok(())
    }

    /// Commit the data file to the repository
    pub fn commit(&self, file_path: &Path, message: &str) -> Result<()> {
        let repo = match &self.repo {
            Some(r) => r.lock().unwrap(),
            None => return Ok(()), // Not a git repo, skip
        };

        let repo_workdir = repo
            .workdir()
            .context("Repository has no working directory")?
            .canonicalize()
            .context("Failed to resolve repository working directory")?;
        // Resolve the data file too so relative paths strip cleanly
        let file_path = file_path
            .canonicalize()
            .context("Failed to resolve data file path")?;
        let relative_path = file_path
            .strip_prefix(&repo_workdir)
            .context("Data file is not in repository")?;

        let mut index = repo.index()?;
        index.add_path(relative_path)?;
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = repo.find_tree(tree_id)?;

        let parent_commit = match repo.head() {
            Ok(head) => {
                let oid = head.target().context("HEAD has no target")?;
                Some(repo.find_commit(oid)?)
            }
            Err(_) => None, // Initial commit
        };

        let signature = Self::get_signature(&repo)?;
        let parents: Vec<_> = parent_commit.iter().collect();

        repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;

        Ok(())
    }

    /// Push accumulated commits to the remote repository
    pub fn push(&self) -> Result<()> {
        let repo = match &self.repo {
            Some(r) => r.lock().unwrap(),
            None => return Ok(()), // Not a git repo, skip
        };

        let head = repo.head().context("Failed to get HEAD")?;
        let branch_name = head
            .shorthand()
            .context("Failed to get branch name")?
            .to_string();

        let mut remote = repo
            .find_remote("origin")
            .context("Failed to find remote 'origin'")?;

        let refspec = format!("refs/heads/{}", branch_name);
        remote.push(&[&refspec], None)?;

        Ok(())
    }

    /// Get or create a git signature for commits
    fn get_signature(repo: &Repository) -> Result<Signature<'_>> {
        let config = repo.config()?;

        let name = config
            .get_string("user.name")
            .unwrap_or_else(|_| "Campus MCP Server".to_string());

        let email = config
            .get_string("user.email")
            .unwrap_or_else(|_| "campus-mcp@localhost".to_string());

        match Signature::now(&name, &email) {
            Ok(sig) => Ok(sig),
            Err(_) => {
                // Fallback to a fixed time if now() fails (e.g., on some CI systems)
                let time = Time::new(1_700_000_000, 0);
                Signature::new(&name, &email, &time)
                    .context("Failed to create signature with fixed time")
            }
        }
    }
}
