//! Fill-the-blanks activity: templated text with `{{}}` markers, one
//! shared option pool offered per blank through a `<select>`.
//!
//! The runtime enforces the injective-assignment invariant: an option
//! chosen in one blank is disabled in every other blank until cleared.

use super::ScriptBundle;
use crate::context::Context;
use momento_model::markers;

/// The blank marker inside authored text.
pub const BLANK_MARKER: &str = "{{}}";

pub fn markup(text: &str, options: &[String]) -> String {
    let mut ctx = Context::new();
    ctx.add_line(&format!(
        "<div class=\"{}\">",
        markers::SELECT_TEXT_CONTAINER_CLASS
    ));
    ctx.indent();

    let mut enunciado = String::from("<p class=\"select-text-enunciado\">");
    let parts: Vec<&str> = text.split(BLANK_MARKER).collect();
    for (i, part) in parts.iter().enumerate() {
        enunciado.push_str(part);
        if i + 1 < parts.len() {
            enunciado.push_str(&select_markup(i, options));
        }
    }
    enunciado.push_str("</p>");
    ctx.add_line(&enunciado);

    ctx.add_line("<div class=\"select-feedback\"></div>");
    ctx.add_line(&format!(
        "<button class=\"{}\" type=\"button\">Validar</button>",
        markers::SELECT_VALIDATE_CLASS
    ));
    ctx.add_line(&format!(
        "<button class=\"{}\" type=\"button\" hidden>Reiniciar</button>",
        markers::SELECT_RESET_CLASS
    ));

    ctx.dedent();
    ctx.add_line("</div>");
    ctx.get_output()
}

fn select_markup(blank_index: usize, options: &[String]) -> String {
    let mut s = format!(
        "<select class=\"{}\" data-blanco=\"{}\"><option value=\"\">Seleccione</option>",
        markers::SELECT_CLASS,
        blank_index
    );
    for (i, option) in options.iter().enumerate() {
        // Option values are 1-based; "" is the cleared state.
        s.push_str(&format!("<option value=\"{}\">{}</option>", i + 1, option));
    }
    s.push_str("</select>");
    s
}

pub fn generate(answers: &[usize]) -> ScriptBundle {
    let correct: Vec<String> = answers.iter().map(|a| (a + 1).to_string()).collect();
    let correct_json = serde_json::to_string(&correct).unwrap_or_else(|_| "[]".to_string());

    let mut js = String::new();
    js.push_str("(function () {\n");
    js.push_str(&format!("  var respuestasCorrectas = {};\n", correct_json));
    js.push_str(JS_MACHINE);
    js.push_str("})();\n");

    ScriptBundle {
        css: CSS.to_string(),
        js,
    }
}

const JS_MACHINE: &str = r#"  var selects = Array.prototype.slice.call(document.querySelectorAll('.select'));
  var btnValidar = document.querySelector('.select-validate');
  var btnReiniciar = document.querySelector('.select-reset');
  var feedback = document.querySelector('.select-feedback');

  function sincronizarOpciones() {
    var usados = selects.map(function (s) { return s.value; })
      .filter(function (v) { return v !== ''; });
    selects.forEach(function (s) {
      Array.prototype.forEach.call(s.options, function (o) {
        if (o.value === '') { return; }
        o.disabled = usados.indexOf(o.value) !== -1 && s.value !== o.value;
      });
    });
  }

  selects.forEach(function (s) {
    s.addEventListener('change', sincronizarOpciones);
  });

  btnValidar.addEventListener('click', function () {
    var correctas = 0;
    selects.forEach(function (s, i) {
      if (s.value === respuestasCorrectas[i]) { correctas++; }
    });
    var porcentaje = Math.round((correctas / respuestasCorrectas.length) * 100);
    feedback.textContent = 'Respuestas correctas: ' + correctas + ' de ' +
      respuestasCorrectas.length + ' (' + porcentaje + '%)';
    selects.forEach(function (s) { s.disabled = true; });
    btnValidar.disabled = true;
    btnReiniciar.hidden = false;
  });

  btnReiniciar.addEventListener('click', function () {
    selects.forEach(function (s) {
      s.value = '';
      s.disabled = false;
      Array.prototype.forEach.call(s.options, function (o) { o.disabled = false; });
    });
    btnValidar.disabled = false;
    btnReiniciar.hidden = true;
    feedback.textContent = '';
  });
"#;

const CSS: &str = r#".select-text-actividad {
  padding: 1rem;
  border-radius: 8px;
  background: #f5f6fa;
}
.select-text-enunciado {
  line-height: 2.2;
}
.select {
  margin: 0 4px;
  padding: 2px 6px;
  border: 1px solid #b5b8c4;
  border-radius: 4px;
}
.select:disabled {
  background: #e2e3e9;
}
.select-feedback {
  min-height: 1.5rem;
  margin: 0.5rem 0;
  font-weight: 600;
}
.select-validate,
.select-reset {
  padding: 6px 18px;
  border: none;
  border-radius: 4px;
  background: #3a5bd9;
  color: #fff;
  cursor: pointer;
}
.select-validate:disabled {
  background: #9aa6d6;
  cursor: default;
}
"#;
