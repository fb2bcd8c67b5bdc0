//! Named URL patterns and reversal.
//!
//! Route templates use angle-bracket parameters in the
//! `/<pk>/` or `/<int:pk>/` form; reversal substitutes keyword
//! values first, then positional values, and always returns an
//! absolute path.

use std::collections::HashMap;
use std::hash::BuildHasher;

use reladmin_core::error::{AdminError, AdminResult};

/// A named route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPattern {
    /// Qualified view name, e.g. `"admin:blog_author_change"`.
    pub name: String,
    /// Route template, e.g. `"/admin/blog/author/<pk>/change/"`.
    pub route: String,
}

/// Registered URL patterns for one admin site.
#[derive(Debug, Default)]
pub struct UrlReverser {
    patterns: Vec<UrlPattern>,
}

impl UrlReverser {
    /// Creates an empty reverser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a pattern, replacing any existing pattern with the
    /// same name.
    pub fn register(&mut self, name: impl Into<String>, route: impl Into<String>) {
        let name = name.into();
        let route = route.into();
        if let Some(existing) = self.patterns.iter_mut().find(|p| p.name == name) {
            existing.route = route;
        } else {
            self.patterns.push(UrlPattern { name, route });
        }
    }

    /// Removes a pattern by name.
    pub fn remove(&mut self, name: &str) {
        self.patterns.retain(|p| p.name != name);
    }

    /// Whether a pattern with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.name == name)
    }

    /// Number of registered patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether no patterns are registered.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Builds the path for a named pattern.
    ///
    /// `kwargs` values are matched to parameters by name; remaining
    /// parameters consume `args` left to right.
    pub fn reverse<S: BuildHasher>(
        &self,
        name: &str,
        args: &[&str],
        kwargs: &HashMap<&str, &str, S>,
    ) -> AdminResult<String> {
        let pattern = self
            .patterns
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| AdminError::NotFound(format!("Reverse for '{name}' not found")))?;

        let path = substitute_pattern(&pattern.route, args, kwargs)?;
        if path.starts_with('/') {
            Ok(path)
        } else {
            Ok(format!("/{path}"))
        }
    }
}

fn substitute_pattern<S: BuildHasher>(
    route: &str,
    args: &[&str],
    kwargs: &HashMap<&str, &str, S>,
) -> AdminResult<String> {
    let mut result = String::new();
    let mut remaining = route;
    let mut arg_index = 0;

    while let Some(start) = remaining.find('<') {
        result.push_str(&remaining[..start]);
        let after = &remaining[start + 1..];
        let end = after.find('>').ok_or_else(|| {
            AdminError::ImproperlyConfigured(format!(
                "Unclosed angle bracket in route template: {route}"
            ))
        })?;

        // Strip the converter prefix: "<int:pk>" names the parameter "pk".
        let inner = &after[..end];
        let param_name = inner.find(':').map_or(inner, |pos| &inner[pos + 1..]);

        if let Some(value) = kwargs.get(param_name) {
            result.push_str(value);
        } else if arg_index < args.len() {
            result.push_str(args[arg_index]);
            arg_index += 1;
        } else {
            return Err(AdminError::NotFound(format!(
                "No value provided for parameter '{param_name}' in URL pattern"
            )));
        }

        remaining = &after[end + 1..];
    }

    result.push_str(remaining);
    Ok(result)
}
