use anyhow::Result;

use mdrip::{Config, DocumentParser, File, Folder, MarkdownParser, Repo, TreeNode, TreeVisitor};

/// Renders each document to HTML, preceded by a comment naming it.
struct HtmlRenderer {
    parser: MarkdownParser,
    out: String,
}

impl TreeVisitor for HtmlRenderer {
    fn visit_file(&mut self, file: &File) {
        let source = String::from_utf8_lossy(file.content());
        self.out.push_str(&format!("<!-- {} -->\n", file.full_name()));
        self.out.push_str(&self.parser.render_html(&source));
    }

    fn visit_folder(&mut self, folder: &Folder) {
        folder.visit_files(self);
        folder.visit_folders(self);
    }

    fn visit_repo(&mut self, repo: &Repo) {
        repo.folder().accept(self);
    }
}

pub fn cmd_render(config: &Config, path: &str) -> Result<()> {
    let mut renderer = HtmlRenderer {
        parser: MarkdownParser::new(),
        out: String::new(),
    };
    for tree in super::load_all(config, &[path.to_string()])? {
        tree.accept(&mut renderer);
    }
    print!("{}", renderer.out);
    Ok(())
}
