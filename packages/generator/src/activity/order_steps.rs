//! Step-ordering activity. Two parallel runtime implementations keyed by
//! viewport width, chosen once at load and never re-evaluated:
//!
//! - full (>768px): draggable list reorder, positional comparison on
//!   every validate click (repeatable);
//! - compact (≤768px): one position `<select>` per step with the same
//!   injective-assignment invariant as fill-the-blanks.
//!
//! The authored order is the correct order; each rendered step carries
//! its authored index in `data-orden`.

use super::ScriptBundle;
use crate::context::Context;
use momento_model::markers;

pub fn markup(steps: &[String]) -> String {
    let mut ctx = Context::new();
    ctx.add_line(&format!(
        "<div id=\"{}\">",
        markers::ORDER_STEPS_CONTAINER_ID
    ));
    ctx.indent();

    // Full variant: draggable list.
    ctx.add_line("<ul class=\"pasos-lista\">");
    ctx.indent();
    for (i, step) in steps.iter().enumerate() {
        ctx.add_line(&format!(
            "<li class=\"paso\" draggable=\"true\" data-orden=\"{}\">{}</li>",
            i, step
        ));
    }
    ctx.dedent();
    ctx.add_line("</ul>");

    // Compact variant: one position select per step.
    ctx.add_line("<div class=\"pasos-compacto\" hidden>");
    ctx.indent();
    for (i, step) in steps.iter().enumerate() {
        ctx.add_line(&format!(
            "<div class=\"paso-fila\" data-orden=\"{}\"><span>{}</span>{}</div>",
            i,
            step,
            position_select(i, steps.len())
        ));
    }
    ctx.dedent();
    ctx.add_line("</div>");

    ctx.add_line("<div class=\"ordenar-feedback\"></div>");
    ctx.add_line("<button class=\"ordenar-validar\" type=\"button\">Validar</button>");
    ctx.add_line("<button class=\"ordenar-reiniciar\" type=\"button\">Reiniciar</button>");

    ctx.dedent();
    ctx.add_line("</div>");
    ctx.get_output()
}

fn position_select(step_index: usize, count: usize) -> String {
    let mut s = format!(
        "<select class=\"paso-select\" data-paso=\"{}\"><option value=\"\">Posición</option>",
        step_index
    );
    for pos in 1..=count {
        s.push_str(&format!("<option value=\"{}\">{}</option>", pos, pos));
    }
    s.push_str("</select>");
    s
}

pub fn generate(steps: &[String]) -> ScriptBundle {
    let mut js = String::new();
    js.push_str("(function () {\n");
    js.push_str(&format!("  var totalPasos = {};\n", steps.len()));
    js.push_str(JS_MACHINE);
    js.push_str("})();\n");

    ScriptBundle {
        css: CSS.to_string(),
        js,
    }
}

const JS_MACHINE: &str = r#"  var contenedor = document.getElementById('ordenar-pasos-actividad');
  var lista = contenedor.querySelector('.pasos-lista');
  var compacto = contenedor.querySelector('.pasos-compacto');
  var feedback = contenedor.querySelector('.ordenar-feedback');
  var btnValidar = contenedor.querySelector('.ordenar-validar');
  var btnReiniciar = contenedor.querySelector('.ordenar-reiniciar');

  // Variant is chosen once at load; a resize needs a page reload.
  var esCompacto = window.innerWidth <= 768;

  function mezclar(nodos, padre) {
    var copia = nodos.slice();
    for (var i = copia.length - 1; i > 0; i--) {
      var j = Math.floor(Math.random() * (i + 1));
      var t = copia[i]; copia[i] = copia[j]; copia[j] = t;
    }
    copia.forEach(function (n) { padre.appendChild(n); });
  }

  function mostrarResultado(correctas) {
    if (correctas === totalPasos) {
      feedback.textContent = '¡Todos los pasos en orden! (' + correctas + ' de ' + totalPasos + ')';
    } else {
      feedback.textContent = 'Ordenaste correctamente ' + correctas + ' de ' + totalPasos + ' pasos.';
    }
  }

  if (esCompacto) {
    lista.hidden = true;
    compacto.hidden = false;

    var filas = Array.prototype.slice.call(compacto.querySelectorAll('.paso-fila'));
    mezclar(filas, compacto);
    var selects = Array.prototype.slice.call(compacto.querySelectorAll('.paso-select'));

    function sincronizarPosiciones() {
      var usadas = selects.map(function (s) { return s.value; })
        .filter(function (v) { return v !== ''; });
      selects.forEach(function (s) {
        Array.prototype.forEach.call(s.options, function (o) {
          if (o.value === '') { return; }
          o.disabled = usadas.indexOf(o.value) !== -1 && s.value !== o.value;
        });
      });
    }
    selects.forEach(function (s) {
      s.addEventListener('change', sincronizarPosiciones);
    });

    btnValidar.addEventListener('click', function () {
      var correctas = 0;
      selects.forEach(function (s) {
        var orden = parseInt(s.closest('.paso-fila').getAttribute('data-orden'), 10);
        if (s.value === String(orden + 1)) { correctas++; }
      });
      mostrarResultado(correctas);
    });

    btnReiniciar.addEventListener('click', function () {
      selects.forEach(function (s) {
        s.value = '';
        Array.prototype.forEach.call(s.options, function (o) { o.disabled = false; });
      });
      feedback.textContent = '';
    });
  } else {
    compacto.hidden = true;

    var pasos = Array.prototype.slice.call(lista.querySelectorAll('.paso'));
    mezclar(pasos, lista);

    var arrastrado = null;
    lista.addEventListener('dragstart', function (e) {
      arrastrado = e.target.closest('.paso');
    });
    lista.addEventListener('dragover', function (e) {
      e.preventDefault();
    });
    lista.addEventListener('drop', function (e) {
      e.preventDefault();
      var destino = e.target.closest('.paso');
      if (!arrastrado || !destino || arrastrado === destino) { return; }
      var nodos = Array.prototype.slice.call(lista.children);
      if (nodos.indexOf(arrastrado) < nodos.indexOf(destino)) {
        destino.after(arrastrado);
      } else {
        destino.before(arrastrado);
      }
      arrastrado = null;
    });

    // Repeatable: recomputed on every click, nothing locks.
    btnValidar.addEventListener('click', function () {
      var correctas = 0;
      Array.prototype.forEach.call(lista.children, function (li, pos) {
        if (parseInt(li.getAttribute('data-orden'), 10) === pos) { correctas++; }
      });
      mostrarResultado(correctas);
    });

    btnReiniciar.addEventListener('click', function () {
      mezclar(Array.prototype.slice.call(lista.children), lista);
      feedback.textContent = '';
    });
  }
"#;

const CSS: &str = r#"#ordenar-pasos-actividad {
  padding: 1rem;
}
#ordenar-pasos-actividad .pasos-lista {
  list-style: none;
  padding: 0;
}
#ordenar-pasos-actividad .paso {
  margin: 6px 0;
  padding: 10px 14px;
  border: 1px solid #b5b8c4;
  border-radius: 6px;
  background: #fff;
  cursor: grab;
}
#ordenar-pasos-actividad .paso-fila {
  display: flex;
  justify-content: space-between;
  align-items: center;
  margin: 6px 0;
  padding: 8px 12px;
  border: 1px solid #b5b8c4;
  border-radius: 6px;
}
#ordenar-pasos-actividad .ordenar-feedback {
  min-height: 1.5rem;
  margin: 0.5rem 0;
  font-weight: 600;
}
#ordenar-pasos-actividad .ordenar-validar,
#ordenar-pasos-actividad .ordenar-reiniciar {
  padding: 6px 18px;
  border: none;
  border-radius: 4px;
  background: #3a5bd9;
  color: #fff;
  cursor: pointer;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn steps() -> Vec<String> {
        vec![
            "Abrir la aplicación".to_string(),
            "Iniciar sesión".to_string(),
            "Completar el perfil".to_string(),
        ]
    }

    #[test]
    fn test_markup_has_both_variants() {
        let html = markup(&steps());
        assert!(html.contains("id=\"ordenar-pasos-actividad\""));
        assert_eq!(html.matches("class=\"paso\"").count(), 3);
        assert_eq!(html.matches("paso-fila").count(), 3);
        assert!(html.contains("data-orden=\"2\""));
    }

    #[test]
    fn test_compact_positions_are_one_based() {
        let html = markup(&steps());
        assert!(html.contains("<option value=\"1\">1</option>"));
        assert!(html.contains("<option value=\"3\">3</option>"));
        assert!(!html.contains("<option value=\"4\">4</option>"));
    }

    #[test]
    fn test_variant_chosen_once_by_viewport() {
        let bundle = generate(&steps());
        assert!(bundle.js.contains("window.innerWidth <= 768"));
        assert!(!bundle.js.contains("addEventListener('resize'"));
    }

    #[test]
    fn test_fully_correct_message_variant() {
        let bundle = generate(&steps());
        assert!(bundle.js.contains("var totalPasos = 3;"));
        assert!(bundle.js.contains("¡Todos los pasos en orden!"));
        assert!(bundle.js.contains("Ordenaste correctamente "));
    }

    #[test]
    fn test_css_targets_container() {
        let bundle = generate(&steps());
        assert!(bundle.css.contains("#ordenar-pasos-actividad"));
        assert!(bundle.css.contains(".paso"));
    }
}
