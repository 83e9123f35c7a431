//! End-to-end runs of the injection workflow against a real directory.

use std::{fs, path::Path};

use chedit_codegen::{Project, inject};
use chedit_core::{DirCatalog, FileKey, FsStore, Outcome, detect_components};
use chedit_manifest::Manifest;
use tempfile::TempDir;

struct Fixture {
    _temp: TempDir,
    root: std::path::PathBuf,
    templates: std::path::PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("site");
        let templates = temp.path().join("templates");
        fs::create_dir_all(&root).unwrap();
        fs::create_dir_all(&templates).unwrap();

        let files = [
            ("focus.tsx", "export const focus: AnnotationHandler = {}\n"),
            ("focus.client.tsx", "\"use client\"\nexport function PreWithFocus() {}\n"),
            ("mark.tsx", "export const mark: AnnotationHandler = {}\n"),
            ("diff.tsx", "export const diff: AnnotationHandler = {}\n"),
            ("copy-button.tsx", "export function CopyButton() {}\n"),
            ("code-mentions.tsx", "export function HoverContainer() {}\nexport function Link() {}\n"),
            (
                "fold.tsx",
                "export const InlineFold: AnnotationHandler[\"Inline\"] = () => null\n\
                 export const fold: AnnotationHandler = { name: \"fold\", Inline: InlineFold }\n",
            ),
            ("tabs.tsx", "export function CodeWithTabs() {}\n"),
            ("classname.tsx", "export function ClassName() {}\n"),
            ("typescript.tsx", "export function TypeScript() {}\n"),
        ];
        for (name, content) in files {
            fs::write(templates.join(name), content).unwrap();
        }

        Self {
            _temp: temp,
            root,
            templates,
        }
    }

    fn project(&self) -> Project<FsStore> {
        Project::new(FsStore::new(&self.root), &Manifest::default())
    }

    fn catalog(&self) -> DirCatalog {
        DirCatalog::new(&self.templates)
    }

    fn read(&self, path: impl AsRef<Path>) -> String {
        fs::read_to_string(self.root.join(path)).unwrap()
    }
}

fn keys(keys: &[&str]) -> Vec<FileKey> {
    keys.iter().map(|k| FileKey::from(*k)).collect()
}

#[test]
fn test_inject_copies_and_generates() {
    let fx = Fixture::new();
    let report = inject(&fx.project(), &fx.catalog(), ["Focus", "CopyButton"]);

    assert_eq!(report.injected, keys(&["focus", "copy-button"]));
    assert!(report.skipped.is_empty());
    assert!(report.failed.is_empty());
    assert_eq!(report.code, Outcome::Created);
    assert_eq!(report.wrappers, Outcome::Updated);
    assert_eq!(report.mdx, Outcome::Unchanged);
    assert_eq!(report.styles, None);

    assert!(fx.root.join("app/components/focus.tsx").exists());
    assert!(fx.root.join("app/components/focus.client.tsx").exists());
    assert!(fx.root.join("app/components/copy-button.tsx").exists());

    let code = fx.read("app/components/code.tsx");
    assert!(code.contains("import { focus } from \"./focus\"\n"));
    assert!(code.contains("import { CopyButton } from \"./copy-button\"\n"));
    assert!(code.contains("<CopyButton text={highlighted.code} />"));
    assert!(code.contains("handlers={[focus]}"));
}

#[test]
fn test_inject_twice_skips_everything() {
    let fx = Fixture::new();
    inject(&fx.project(), &fx.catalog(), ["focus", "copy-button", "fold"]);
    let before = fx.read("app/components/code.tsx");

    let report = inject(&fx.project(), &fx.catalog(), ["focus", "copy-button", "fold"]);

    assert!(report.injected.is_empty());
    assert_eq!(report.skipped, keys(&["focus", "copy-button", "fold"]));
    assert_eq!(report.code, Outcome::Unchanged);
    assert_eq!(report.wrappers, Outcome::Unchanged);
    assert_eq!(fx.read("app/components/code.tsx"), before);
}

#[test]
fn test_inject_expands_dependencies() {
    let fx = Fixture::new();
    let report = inject(&fx.project(), &fx.catalog(), ["diff"]);

    assert_eq!(report.requested, keys(&["diff", "mark"]));
    assert_eq!(report.injected, keys(&["diff", "mark"]));
    assert!(fx.read("app/components/code.tsx").contains("handlers={[diff, mark]}"));
}

#[test]
fn test_inject_code_mentions_registers_mdx_and_styles() {
    let fx = Fixture::new();
    fs::create_dir_all(fx.root.join("app")).unwrap();
    fs::write(fx.root.join("app/globals.css"), "@tailwind base;\n").unwrap();

    let report = inject(&fx.project(), &fx.catalog(), ["code-mentions"]);

    assert_eq!(report.injected, keys(&["code-mentions"]));
    assert_eq!(report.code, Outcome::Unchanged);
    assert_eq!(report.mdx, Outcome::Created);
    assert_eq!(report.styles, Some(Outcome::Updated));
    assert!(!fx.root.join("app/components/code.tsx").exists());

    let mdx = fx.read("mdx-components.tsx");
    assert!(mdx.contains("import { HoverContainer, Link } from \"./app/components/code-mentions\""));
    assert!(fx.read("app/globals.css").contains("/* codehike:code-mentions */"));
}

#[test]
fn test_inject_detected_components() {
    let fx = Fixture::new();
    let detected = detect_components("# Types\n\n<ClassName />\n<TypeScript />\n");

    let report = inject(&fx.project(), &fx.catalog(), &detected);

    assert_eq!(report.injected, keys(&["classname", "typescript"]));
    assert!(report.failed.is_empty());
    assert!(fx.root.join("app/components/classname.tsx").exists());
    assert!(fx.root.join("app/components/typescript.tsx").exists());
}

#[test]
fn test_inject_missing_template_fails_others_proceed() {
    let fx = Fixture::new();
    let report = inject(&fx.project(), &fx.catalog(), ["spotlight", "mark"]);

    assert_eq!(report.failed, keys(&["spotlight"]));
    assert_eq!(report.injected, keys(&["mark"]));
    assert_eq!(report.code, Outcome::Created);
}

#[test]
fn test_inject_plain_component_is_copied_only() {
    let fx = Fixture::new();
    let report = inject(&fx.project(), &fx.catalog(), ["tabs"]);

    assert_eq!(report.injected, keys(&["tabs"]));
    assert_eq!(report.code, Outcome::Unchanged);
    assert!(fx.root.join("app/components/tabs.tsx").exists());
    // companion listed for tabs is absent from the catalog
    assert!(!fx.root.join("app/components/tabs.client.tsx").exists());
}

#[test]
fn test_inject_respects_manifest_layout() {
    let fx = Fixture::new();
    let manifest = Manifest::parse(
        "[project]\ncomponents = \"components/hike\"\nextension = \"jsx\"\n\n[code]\ntheme = \"dracula\"\n",
    )
    .unwrap();
    let project = Project::new(FsStore::new(&fx.root), &manifest);

    inject(&project, &fx.catalog(), ["focus", "code-mentions"]);

    let code = fx.read("components/hike/code.jsx");
    assert!(code.contains("highlight(codeblock, \"dracula\")"));
    assert!(code.contains("export async function Code({ codeblock }) {"));
    assert!(!fx.read("mdx-components.jsx").contains("MDXComponents"));
    assert!(fx.read("mdx-components.jsx").contains("from \"./components/hike/code-mentions\""));
    assert!(fx.root.join("app/globals.css").exists());
}
