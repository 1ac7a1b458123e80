/// Trait for widgets that can provide debug information
///
/// Widgets implement this to provide consistent debug output
/// for the F5 debug overlay.
pub trait DebugInfoProvider {
    /// Generate a formatted string containing debug information about the widget's state
    ///
    /// The output should be human-readable and include:
    /// - Widget name/type as a header
    /// - Current state (pools, query, highlight, etc.)
    /// - Configuration or settings
    fn debug_info(&self) -> String;

    /// Optional: Get a short one-line summary of the widget state
    /// Useful for compact debug views
    fn debug_summary(&self) -> String {
        "No summary available".to_string()
    }
}
