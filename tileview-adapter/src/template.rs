use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;

/// Renders one item (with its index in the item sequence) to the text a tile shows.
pub type RenderFn<T> = Arc<dyn Fn(&T, usize) -> String + Send + Sync>;

/// Named render templates, resolved by [`crate::HeadlessBinder`] when a view compiles its
/// template key.
pub struct TemplateCache<T> {
    templates: BTreeMap<String, RenderFn<T>>,
}

impl<T> TemplateCache<T> {
    pub fn new() -> Self {
        Self {
            templates: BTreeMap::new(),
        }
    }

    /// Registers `render` under `name`, returning the template it replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        render: impl Fn(&T, usize) -> String + Send + Sync + 'static,
    ) -> Option<RenderFn<T>> {
        self.templates.insert(name.into(), Arc::new(render))
    }

    pub fn with(
        mut self,
        name: impl Into<String>,
        render: impl Fn(&T, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.register(name, render);
        self
    }

    pub fn get(&self, name: &str) -> Option<&RenderFn<T>> {
        self.templates.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<RenderFn<T>> {
        self.templates.remove(name)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }
}

impl<T> Default for TemplateCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for TemplateCache<T> {
    fn clone(&self) -> Self {
        Self {
            templates: self.templates.clone(),
        }
    }
}

impl<T> core::fmt::Debug for TemplateCache<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
