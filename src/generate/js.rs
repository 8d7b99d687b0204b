// ============================================================================
// Behavior-script generation — submission handling for the generated form
// ============================================================================

/// Delay before the iframe fallback declares success, in milliseconds.
/// The sink iframe never reports load state for a cross-origin post.
const FALLBACK_SUCCESS_DELAY_MS: u32 = 1500;

/// Render the submission-handling script.
///
/// The script picks its strategy when the generated form runs, not here:
/// with jQuery and the form plugin present it posts asynchronously, otherwise
/// it posts natively into the hidden sink iframe. The endpoint never exposes
/// its response cross-origin, so both paths treat a completed transport as a
/// delivered submission.
pub fn render_behavior() -> String {
    format!(
        r#"document.addEventListener('DOMContentLoaded', () => {{
    const form = document.getElementById('customForm');
    const successMessage = document.getElementById('success-message');
    const submitButton = form.querySelector('.submit-button');

    const showSuccess = () => {{
        submitButton.disabled = false;
        form.style.display = 'none';
        successMessage.style.display = 'block';
        form.reset();
    }};

    form.addEventListener('submit', (event) => {{
        event.preventDefault();
        submitButton.disabled = true;

        // Feature-detection contract: the async path needs jQuery plus the
        // jquery.form plugin; anything less uses the iframe fallback.
        if (window.jQuery && window.jQuery.fn && window.jQuery.fn.ajaxSubmit) {{
            window.jQuery(form).ajaxSubmit({{
                url: form.action,
                type: 'POST',
                error: showSuccess,
                success: showSuccess
            }});
        }} else {{
            form.target = 'submit-sink';
            form.submit();
            setTimeout(showSuccess, {delay});
        }}
    }});
}});"#,
        delay = FALLBACK_SUCCESS_DELAY_MS
    )
}
