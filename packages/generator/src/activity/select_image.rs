//! Image-matching activity: a grid of images, each answered from a
//! shared pool of labels through a `<select>`.
//!
//! Same injective-assignment invariant as the fill-the-blanks activity,
//! applied across items. Validation is blocked until every item has an
//! answer.

use super::ScriptBundle;
use crate::context::Context;
use momento_model::{markers, ImageItem};

pub fn markup(items: &[ImageItem], options: &[String]) -> String {
    let mut ctx = Context::new();
    ctx.add_line(&format!(
        "<div class=\"{}\">",
        markers::SELECT_IMAGE_CONTAINER_CLASS
    ));
    ctx.indent();

    ctx.add_line(&format!("<div id=\"{}\">", markers::ITEMS_GRID_ID));
    ctx.indent();
    for (i, item) in items.iter().enumerate() {
        ctx.add_line(&format!("<div class=\"item-card\" data-item=\"{}\">", i));
        ctx.indent();
        ctx.add_line(&format!("<img src=\"{}\" alt=\"\">", item.image));
        ctx.add_line(&format!(
            "<p class=\"item-descripcion\">{}</p>",
            item.description
        ));
        ctx.add_line(&item_select(i, options));
        ctx.dedent();
        ctx.add_line("</div>");
    }
    ctx.dedent();
    ctx.add_line("</div>");

    ctx.add_line("<div id=\"seleccion-error\" hidden>Debes responder todos los ítems antes de validar.</div>");
    ctx.add_line("<div id=\"seleccion-feedback\"></div>");
    ctx.add_line(&format!(
        "<button id=\"{}\" type=\"button\">Validar</button>",
        markers::VALIDATE_BTN_ID
    ));
    ctx.add_line(&format!(
        "<button id=\"{}\" type=\"button\" hidden>Reiniciar</button>",
        markers::RESET_BTN_ID
    ));

    ctx.dedent();
    ctx.add_line("</div>");
    ctx.get_output()
}

fn item_select(item_index: usize, options: &[String]) -> String {
    let mut s = format!(
        "<select class=\"item-select\" data-item=\"{}\"><option value=\"\">Seleccione</option>",
        item_index
    );
    for (i, option) in options.iter().enumerate() {
        s.push_str(&format!("<option value=\"{}\">{}</option>", i + 1, option));
    }
    s.push_str("</select>");
    s
}

pub fn generate(items: &[ImageItem]) -> ScriptBundle {
    let correct: Vec<String> = items.iter().map(|i| (i.correct + 1).to_string()).collect();
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

const JS_MACHINE: &str = r#"  var selects = Array.prototype.slice.call(
    document.querySelectorAll('#items-grid .item-select'));
  var btnValidar = document.getElementById('validate-btn');
  var btnReiniciar = document.getElementById('reset-btn');
  var error = document.getElementById('seleccion-error');
  var feedback = document.getElementById('seleccion-feedback');

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
    var incompletos = selects.some(function (s) { return s.value === ''; });
    if (incompletos) {
      error.hidden = false;
      return;
    }
    error.hidden = true;

    var correctas = 0;
    selects.forEach(function (s, i) {
      var card = s.closest('.item-card');
      if (s.value === respuestasCorrectas[i]) {
        correctas++;
        card.classList.add('item-correcto');
      } else {
        card.classList.add('item-incorrecto');
      }
      s.disabled = true;
    });
    var porcentaje = Math.round((correctas / respuestasCorrectas.length) * 100);
    feedback.textContent = 'Acertaste ' + correctas + ' de ' +
      respuestasCorrectas.length + ' (' + porcentaje + '%)';
    btnValidar.disabled = true;
    btnReiniciar.hidden = false;
  });

  btnReiniciar.addEventListener('click', function () {
    selects.forEach(function (s) {
      s.value = '';
      s.disabled = false;
      Array.prototype.forEach.call(s.options, function (o) { o.disabled = false; });
      var card = s.closest('.item-card');
      card.classList.remove('item-correcto', 'item-incorrecto');
    });
    btnValidar.disabled = false;
    btnReiniciar.hidden = true;
    feedback.textContent = '';
    error.hidden = true;
  });
"#;

const CSS: &str = r#".seleccion-imagen-actividad {
  padding: 1rem;
}
#items-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
  gap: 1rem;
}
#items-grid .item-card {
  border: 2px solid #d8dae3;
  border-radius: 8px;
  padding: 0.75rem;
  text-align: center;
}
#items-grid .item-card img {
  max-width: 100%;
  border-radius: 4px;
}
#items-grid .item-correcto {
  border-color: #2e9e5b;
}
#items-grid .item-incorrecto {
  border-color: #d2454b;
}
#seleccion-error {
  color: #d2454b;
  margin: 0.5rem 0;
  font-weight: 600;
}
#seleccion-feedback {
  min-height: 1.5rem;
  margin: 0.5rem 0;
  font-weight: 600;
}
#validate-btn,
#reset-btn {
  padding: 6px 18px;
  border: none;
  border-radius: 4px;
  background: #3a5bd9;
  color: #fff;
  cursor: pointer;
}
#validate-btn:disabled {
  background: #9aa6d6;
  cursor: default;
}
"#;
