/// About y related-work no llevan datos: el template se muestra tal cual
pub fn render_static(template: &str) -> String {
    template.to_string()
}
