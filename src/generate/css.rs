use crate::generate::color::hex_to_rgb;

// ============================================================================
// Stylesheet generation — theme variables plus a fixed layout sheet
// ============================================================================

/// Render the stylesheet for a theme color.
///
/// Only the `:root` block depends on the input: the color becomes a custom
/// property and a literal `r, g, b` triple for alpha compositing. An
/// unparsable color degrades to black rather than failing the render.
pub fn render_stylesheet(theme_color: &str) -> String {
    let (r, g, b) = hex_to_rgb(theme_color).unwrap_or((0, 0, 0));

    format!(
        r#":root {{
    --primary-color: {theme_color};
    --primary-rgb: {r}, {g}, {b};
    --text-color: #202124;
    --light-text: #5F6368;
    --border-color: #DADCE0;
    --background-color: #F8F9FA;
    --card-background: #FFFFFF;
    --error-color: #EA4335;
    --success-color: #34A853;
}}

* {{
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}}

body {{
    font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, 'Helvetica Neue', sans-serif;
    background-color: var(--background-color);
    color: var(--text-color);
    line-height: 1.5;
    min-height: 100vh;
    display: flex;
    justify-content: center;
    align-items: center;
    padding: 2rem 1rem;
}}

.container {{
    width: 100%;
    max-width: 600px;
    background-color: var(--card-background);
    border-radius: 8px;
    box-shadow: 0 1px 2px 0 rgba(60, 64, 67, 0.3), 0 1px 3px 1px rgba(60, 64, 67, 0.15);
    overflow: hidden;
}}

form {{
    display: flex;
    flex-direction: column;
}}

.form-header {{
    padding: 2rem 2rem 1.5rem;
    border-top: 10px solid var(--primary-color);
}}

.form-header h1 {{
    font-size: 1.75rem;
    font-weight: 500;
    color: var(--text-color);
    margin-bottom: 0.5rem;
}}

.form-description {{
    color: var(--light-text);
    font-size: 0.875rem;
}}

.form-fields {{
    padding: 1.5rem 2rem;
}}

.form-group {{
    margin-bottom: 1.5rem;
}}

.form-group label {{
    display: block;
    font-size: 0.875rem;
    font-weight: 500;
    margin-bottom: 0.5rem;
    color: var(--text-color);
}}

.form-group input,
.form-group textarea {{
    width: 100%;
    padding: 0.75rem;
    border: 1px solid var(--border-color);
    border-radius: 4px;
    font-size: 1rem;
    font-family: inherit;
    transition: border-color 0.2s;
}}

.form-group input:focus,
.form-group textarea:focus {{
    outline: none;
    border-color: var(--primary-color);
    box-shadow: 0 0 0 2px rgba(var(--primary-rgb), 0.2);
}}

.helper-text {{
    margin-top: 0.375rem;
    color: var(--light-text);
    font-size: 0.75rem;
}}

.choice-group {{
    border: none;
}}

.choice-group legend {{
    font-size: 0.875rem;
    font-weight: 500;
    margin-bottom: 0.5rem;
    color: var(--text-color);
}}

.choice-option {{
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 0.5rem;
}}

.choice-option input {{
    width: auto;
    accent-color: var(--primary-color);
}}

.choice-option label {{
    display: inline;
    font-weight: 400;
    margin-bottom: 0;
}}

.form-footer {{
    padding: 1.5rem 2rem 2rem;
    display: flex;
    justify-content: flex-end;
}}

.submit-button {{
    background-color: var(--primary-color);
    color: white;
    border: none;
    border-radius: 4px;
    padding: 0.75rem 2rem;
    font-size: 0.875rem;
    font-weight: 500;
    cursor: pointer;
    transition: background-color 0.2s, box-shadow 0.2s;
}}

.submit-button:hover {{
    box-shadow: 0 1px 2px 0 rgba(60, 64, 67, 0.3), 0 1px 3px 1px rgba(60, 64, 67, 0.15);
}}

.submit-button:disabled {{
    opacity: 0.6;
    cursor: wait;
}}

.submit-sink {{
    position: absolute;
    width: 0;
    height: 0;
    border: 0;
    visibility: hidden;
}}

.success-message {{
    padding: 3rem 2rem;
    text-align: center;
}}

.success-icon {{
    width: 64px;
    height: 64px;
    background-color: var(--success-color);
    color: white;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 2rem;
    margin: 0 auto 1.5rem;
}}

.success-message h2 {{
    font-size: 1.5rem;
    font-weight: 500;
    margin-bottom: 0.5rem;
}}

.success-message p {{
    color: var(--light-text);
}}

@media (max-width: 768px) {{
    .form-header,
    .form-fields,
    .form-footer {{
        padding-left: 1.5rem;
        padding-right: 1.5rem;
    }}

    .form-header h1 {{
        font-size: 1.5rem;
    }}
}}"#
    )
}
