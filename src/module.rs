/// Icon a host navigation shows next to a module entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleIcon {
    ClipboardList,
}

impl ModuleIcon {
    /// Phosphor glyph used when rendering the icon with egui.
    pub fn glyph(self) -> &'static str {
        match self {
            ModuleIcon::ClipboardList => egui_phosphor::regular::CLIPBOARD_TEXT,
        }
    }
}

/// Registration data for a view: display name, navigation path, icon and
/// the component that renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleConfig {
    pub name: &'static str,
    pub path: &'static str,
    pub icon: ModuleIcon,
    pub component: &'static str,
}

pub const PROJECTS_MODULE: ModuleConfig = ModuleConfig {
    name: "Projects",
    path: "/projects",
    icon: ModuleIcon::ClipboardList,
    component: "ProjectsMain",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_module_registration() {
        assert_eq!(PROJECTS_MODULE.name, "Projects");
        assert_eq!(PROJECTS_MODULE.path, "/projects");
        assert_eq!(PROJECTS_MODULE.component, "ProjectsMain");
        assert_eq!(PROJECTS_MODULE.icon, ModuleIcon::ClipboardList);
        assert!(!PROJECTS_MODULE.icon.glyph().is_empty());
    }
}
