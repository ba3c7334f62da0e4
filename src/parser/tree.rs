use crate::parser::ast::{Assignment, Statement};

const ROOT: &str = "PROGRAM\n";
const INVALID: &str = "  Invalid or incomplete statement\n";

/// Renders the syntactic tree of every statement. Operands are shown as
/// written, never evaluated; malformed statements degrade to a marker line.
pub fn build_tree(stmts: &[Statement]) -> String {
    let mut tree = String::from(ROOT);

    for stmt in stmts {
        match stmt.assignment() {
            Some(assignment) => render_assignment(&mut tree, &assignment),
            None => tree.push_str(INVALID),
        }
    }

    tree
}

fn render_assignment(tree: &mut String, assignment: &Assignment) {
    let Assignment {
        target,
        left,
        operator,
        right,
    } = assignment;

    let block = format!(
        "\n  ASSIGN: {target} = {left} {op} {right}\n\
         \x20          =\n\
         \x20        /   \\\n\
         \x20    {target}    {op}\n\
         \x20          /     \\\n\
         \x20       {left}   {right}\n",
        target = target,
        left = left,
        op = operator,
        right = right,
    );

    tree.push_str(&block);
}
