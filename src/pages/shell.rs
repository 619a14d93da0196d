use crate::components::ACKNOWLEDGEMENT;
use crate::navigation::Route;
use crate::utils::error::{Result, SiteError};
use crate::view::{escape_attr, escape_text, Element, Node};

/// 在真正的瀏覽器裡接上平滑捲動、客戶端路由與表單送出
///
/// 每份輸出文件都包含所有頁面，只有目前路由的頁面可見；
/// 換頁以 `history.pushState` 切換可見頁面，不重新載入文件。
const HOST_SCRIPT: &str = r#"function normalizePath(path) {
  var trimmed = path.replace(/\/+$/, '');
  return trimmed === '' ? '/' : trimmed;
}
function showPage(path) {
  var pages = document.querySelectorAll('[data-page]');
  var match = null;
  pages.forEach(function (page) {
    if (page.getAttribute('data-page') === path) {
      match = page;
    }
  });
  if (!match) {
    return false;
  }
  pages.forEach(function (page) {
    page.hidden = page !== match;
  });
  document.title = match.getAttribute('data-title');
  window.scrollTo(0, 0);
  return true;
}
function navigate(path) {
  path = normalizePath(path);
  if (path === normalizePath(window.location.pathname)) {
    return true;
  }
  if (!showPage(path)) {
    return false;
  }
  window.history.pushState({ path: path }, '', path);
  return true;
}
document.addEventListener('click', function (event) {
  var target = event.target.closest('[data-scroll-target], [data-route], [data-action="back"]');
  if (!target) {
    return;
  }
  if (target.hasAttribute('data-scroll-target')) {
    var section = document.getElementById(target.getAttribute('data-scroll-target'));
    if (section && !section.closest('[hidden]')) {
      section.scrollIntoView({ behavior: 'smooth' });
    }
  } else if (target.hasAttribute('data-route')) {
    if (navigate(target.getAttribute('data-route'))) {
      event.preventDefault();
    }
  } else {
    event.preventDefault();
    navigate('/');
  }
});
window.addEventListener('popstate', function () {
  showPage(normalizePath(window.location.pathname));
});
document.querySelectorAll('form').forEach(function (form) {
  form.addEventListener('submit', function (event) {
    event.preventDefault();
    var status = form.querySelector('.form-status');
    if (!status) {
      status = document.createElement('p');
      status.className = 'form-status';
      form.appendChild(status);
    }
    status.textContent = ACKNOWLEDGEMENT;
    form.reset();
  });
});"#;

/// One rendered route, embedded in every output document.
#[derive(Debug, Clone)]
pub struct PageView {
    pub route: Route,
    pub title: String,
    pub body: Node,
}

/// Wraps all rendered pages in a complete HTML5 document with `active` visible.
pub fn document(stylesheet: &str, views: &[PageView], active: Route) -> Result<String> {
    let current = views
        .iter()
        .find(|view| view.route == active)
        .ok_or_else(|| SiteError::RenderError {
            message: format!("No page was rendered for {}", active.path()),
        })?;

    let root: Node = Element::new("div")
        .id("root")
        .children(views.iter().map(|view| {
            Element::new("div")
                .attr("data-page", view.route.path())
                .attr("data-title", view.title.as_str())
                .attr_if(view.route != active, "hidden", "")
                .child(view.body.clone())
        }))
        .into();

    // 以 JSON 字串常值嵌入，避免手動跳脫
    let acknowledgement = serde_json::to_string(ACKNOWLEDGEMENT)?;

    Ok(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<link rel=\"stylesheet\" href=\"{}\">\n</head>\n\
         <body>\n{}\n<script>\nvar ACKNOWLEDGEMENT = {};\n{}\n</script>\n</body>\n</html>\n",
        escape_text(&current.title),
        escape_attr(stylesheet),
        root.to_html(),
        acknowledgement,
        HOST_SCRIPT
    ))
}
