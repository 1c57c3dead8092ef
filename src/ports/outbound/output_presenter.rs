use crate::shared::Result;

/// OutputPresenter port for presenting rendered output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the rendered dependents graph is presented.
pub trait OutputPresenter {
    /// Presents the rendered content to the output destination
    ///
    /// # Arguments
    /// * `content` - The rendered dependents graph
    ///
    /// # Returns
    /// Success or error if presentation fails
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The output directory cannot be created
    /// - The output path is a symbolic link
    fn present(&self, content: &str) -> Result<()>;
}
