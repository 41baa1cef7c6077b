//! Rendered grammars driven through a reference engine.
