use serde::Serialize;

use crate::error::Result;
use crate::renderer::TemplateRenderer;
use crate::template::content;
use crate::template::tree::FileTree;
use crate::validation::SanitizedName;

/// How a slot's content is produced.
#[derive(Debug, Clone, Copy)]
pub enum SlotContent {
    /// Copied into the tree verbatim.
    Static(&'static str),
    /// Rendered through the [`TemplateRenderer`] with the project name in
    /// scope.
    Templated(&'static str),
}

/// One logical file in the scaffold, identified by its fixed relative path.
#[derive(Debug, Clone, Copy)]
pub struct Slot {
    pub path: &'static str,
    pub content: SlotContent,
}

const fn templated(path: &'static str, template: &'static str) -> Slot {
    Slot { path, content: SlotContent::Templated(template) }
}

const fn fixed(path: &'static str, body: &'static str) -> Slot {
    Slot { path, content: SlotContent::Static(body) }
}

/// The versioned catalogue of every file the scaffold contains. Adding a new
/// file type means adding one entry here.
pub const CATALOGUE: &[Slot] = &[
    templated("manifest.json", content::MANIFEST_JSON_TPL),
    templated("service-worker.js", content::SERVICE_WORKER_JS_TPL),
    templated("index.html", content::INDEX_HTML_TPL),
    templated("README.md", content::README_MD_TPL),
    fixed(".gitignore", content::GITIGNORE),
    fixed("css/main.css", content::MAIN_CSS),
    fixed("css/ui.css", content::UI_CSS),
    fixed("js/main.js", content::MAIN_JS),
    fixed("js/core/GameLoop.js", content::GAME_LOOP_JS),
    fixed("js/core/Renderer.js", content::RENDERER_JS),
    fixed("js/core/InputManager.js", content::INPUT_MANAGER_JS),
    fixed("js/core/AudioManager.js", content::AUDIO_MANAGER_JS),
    fixed("js/core/AssetLoader.js", content::ASSET_LOADER_JS),
    fixed("js/state/Store.js", content::STORE_JS),
    fixed("js/state/SaveSystem.js", content::SAVE_SYSTEM_JS),
    fixed("js/state/Settings.js", content::SETTINGS_JS),
    fixed("js/state/Scoreboard.js", content::SCOREBOARD_JS),
    fixed("js/scenes/SceneManager.js", content::SCENE_MANAGER_JS),
    fixed("js/scenes/MenuScene.js", content::MENU_SCENE_JS),
    fixed("js/scenes/GameScene.js", content::GAME_SCENE_JS),
    fixed("js/ui/UIManager.js", content::UI_MANAGER_JS),
    fixed("js/ui/ErrorDisplay.js", content::ERROR_DISPLAY_JS),
    fixed("js/utils/MathUtils.js", content::MATH_UTILS_JS),
    fixed("js/utils/DOMUtils.js", content::DOM_UTILS_JS),
    fixed("js/utils/ErrorHandler.js", content::ERROR_HANDLER_JS),
    // Asset directories materialize as placeholder files; the tree carries
    // no directory entities.
    fixed("assets/icons/.gitkeep", content::ASSET_DIR_GITKEEP),
    fixed("assets/audio/.gitkeep", content::ASSET_DIR_GITKEEP),
    fixed("assets/textures/.gitkeep", content::ASSET_DIR_GITKEEP),
    fixed("assets/models/.gitkeep", content::ASSET_DIR_GITKEEP),
    fixed("assets/shaders/.gitkeep", content::ASSET_DIR_GITKEEP),
];

#[derive(Serialize)]
struct TemplateContext<'a> {
    name: &'a str,
}

/// Expands the catalogue into a concrete [`FileTree`] for `name`.
///
/// The resulting tree has exactly one entry per catalogue slot, in catalogue
/// order. Render failures propagate verbatim; a path collision means the
/// catalogue itself is malformed and fails the whole run.
pub fn expand(name: &SanitizedName, renderer: &dyn TemplateRenderer) -> Result<FileTree> {
    let context = serde_json::to_value(TemplateContext { name: name.as_str() })?;

    let mut tree = FileTree::new();
    for slot in CATALOGUE {
        let body = match slot.content {
            SlotContent::Static(body) => body.to_string(),
            SlotContent::Templated(template) => {
                renderer.render(template, &context, Some(slot.path))?
            }
        };
        tree.insert(slot.path, body)?;
    }

    debug_assert_eq!(tree.len(), CATALOGUE.len());
    Ok(tree)
}
