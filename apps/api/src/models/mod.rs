pub mod snippet;

pub use snippet::{NewSnippet, Snippet, SnippetPatch};
