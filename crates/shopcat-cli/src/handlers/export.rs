use super::{HandlerContext, ensure_loaded};
use crate::args::CriteriaArgs;
use crate::presentation::presenters;
use crate::presentation::renderers::HtmlRenderer;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Write the filtered grid as a static HTML page, to `output` or stdout.
///
/// A failed load still produces a page carrying the failure message; the
/// command then exits with an error.
pub fn handle(hctx: &HandlerContext, output: Option<&Path>, criteria: &CriteriaArgs) -> Result<()> {
    let state = hctx.loaded_session(Some(criteria))?;

    let list = presenters::build_product_list(&state, hctx.currency()?, false);
    let page = HtmlRenderer::new(state.theme()).render_page(&list);

    match output {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(path, &page)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), count = list.products.len(), "catalog exported");

            if ensure_loaded(&state).is_ok() {
                hctx.render(presenters::present_export_result(path, list.products.len()))?;
            }
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(page.as_bytes())?;
            stdout.flush()?;
        }
    }

    ensure_loaded(&state)
}
