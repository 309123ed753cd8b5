//! Shared sequential question machine for the quiz and true/false
//! activities. Both compile to the same one-question-at-a-time runtime:
//! select an option, validate (locks the question and reveals
//! correctness), continue to the next, and after the last question a
//! per-question summary plus a review navigation strip.
//!
//! A true/false activity is a quiz whose every question offers the two
//! fixed labels; the markup parser relies on finding the literal
//! "Verdadero" among the options to tell the kinds apart.

use super::ScriptBundle;
use crate::context::Context;
use momento_model::{markers, QuizQuestion, Statement};

pub fn markup_quiz(questions: &[QuizQuestion]) -> String {
    let rendered: Vec<(&str, Vec<&str>)> = questions
        .iter()
        .map(|q| {
            (
                q.question.as_str(),
                q.options.iter().map(|o| o.as_str()).collect(),
            )
        })
        .collect();
    build_markup(&rendered)
}

pub fn markup_true_false(statements: &[Statement]) -> String {
    let rendered: Vec<(&str, Vec<&str>)> = statements
        .iter()
        .map(|s| {
            (
                s.text.as_str(),
                vec![markers::TRUE_LABEL, markers::FALSE_LABEL],
            )
        })
        .collect();
    build_markup(&rendered)
}

fn build_markup(questions: &[(&str, Vec<&str>)]) -> String {
    let mut ctx = Context::new();
    ctx.add_line(&format!(
        "<div class=\"{}\">",
        markers::QUESTIONS_CONTAINER_CLASS
    ));
    ctx.indent();

    ctx.add_line("<div class=\"progress-bar\">");
    ctx.indent();
    ctx.add_line(&format!(
        "<div id=\"{}\"></div>",
        markers::PROGRESS_BAR_FILL_ID
    ));
    ctx.dedent();
    ctx.add_line("</div>");

    ctx.add_line(&format!("<div id=\"{}\">", markers::QUESTIONS_HOST_ID));
    ctx.indent();
    for (i, (text, options)) in questions.iter().enumerate() {
        let hidden = if i == 0 { "" } else { " hidden" };
        ctx.add_line(&format!(
            "<div class=\"pregunta\" data-pregunta=\"{}\"{}>",
            i, hidden
        ));
        ctx.indent();
        ctx.add_line(&format!("<p class=\"pregunta-texto\">{}</p>", text));
        for (k, option) in options.iter().enumerate() {
            ctx.add_line(&format!(
                "<button class=\"{}\" data-valor=\"{}\" type=\"button\">{}</button>",
                markers::ANSWER_OPTION_CLASS,
                k + 1,
                option
            ));
        }
        ctx.dedent();
        ctx.add_line("</div>");
    }
    ctx.dedent();
    ctx.add_line("</div>");

    ctx.add_line("<button id=\"btnValidarPregunta\" type=\"button\">Validar</button>");
    ctx.add_line("<button id=\"btnContinuar\" type=\"button\" hidden>Continuar</button>");
    ctx.add_line("<div id=\"resumen-container\" hidden></div>");

    ctx.add_line("<div class=\"quiz-nav\" hidden>");
    ctx.indent();
    ctx.add_line(&format!(
        "<button id=\"{}\" type=\"button\">Anterior</button>",
        markers::NAV_PREV_ID
    ));
    ctx.add_line(&format!(
        "<button id=\"{}\" type=\"button\">Siguiente</button>",
        markers::NAV_NEXT_ID
    ));
    ctx.dedent();
    ctx.add_line("</div>");

    ctx.add_line("<button id=\"btnReiniciarQuiz\" type=\"button\" hidden>Reiniciar</button>");

    ctx.dedent();
    ctx.add_line("</div>");
    ctx.get_output()
}

pub fn generate_quiz(questions: &[QuizQuestion]) -> ScriptBundle {
    let correct: Vec<String> = questions.iter().map(|q| (q.correct + 1).to_string()).collect();
    build_js(&correct)
}

pub fn generate_true_false(statements: &[Statement]) -> ScriptBundle {
    // Verdadero is always option 1, Falso option 2.
    let correct: Vec<String> = statements
        .iter()
        .map(|s| if s.answer { "1" } else { "2" }.to_string())
        .collect();
    build_js(&correct)
}

fn build_js(correct: &[String]) -> ScriptBundle {
    let correct_json = serde_json::to_string(correct).unwrap_or_else(|_| "[]".to_string());

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

const JS_MACHINE: &str = r#"  var total = respuestasCorrectas.length;
  var preguntas = Array.prototype.slice.call(
    document.querySelectorAll('#preguntas-container .pregunta'));
  var btnValidar = document.getElementById('btnValidarPregunta');
  var btnContinuar = document.getElementById('btnContinuar');
  var btnReiniciar = document.getElementById('btnReiniciarQuiz');
  var resumen = document.getElementById('resumen-container');
  var barra = document.getElementById('progress-bar-fill');
  var nav = document.querySelector('.quiz-nav');
  var btnAnterior = document.getElementById('btnAnteriorNav');
  var btnSiguiente = document.getElementById('btnSiguienteNav');

  var actual = 0;
  var elegidas = new Array(total).fill(null);
  var resultados = new Array(total).fill(null);
  var completado = false;

  function mostrar(indice) {
    preguntas.forEach(function (p, i) { p.hidden = i !== indice; });
    actual = indice;
  }

  preguntas.forEach(function (pregunta, i) {
    Array.prototype.forEach.call(
      pregunta.querySelectorAll('.opcion-respuesta'),
      function (opcion) {
        opcion.addEventListener('click', function () {
          if (resultados[i] !== null) { return; }
          Array.prototype.forEach.call(
            pregunta.querySelectorAll('.opcion-respuesta'),
            function (o) { o.classList.remove('opcion-seleccionada'); });
          opcion.classList.add('opcion-seleccionada');
          elegidas[i] = opcion.getAttribute('data-valor');
        });
      });
  });

  btnValidar.addEventListener('click', function () {
    if (elegidas[actual] === null) { return; }
    var pregunta = preguntas[actual];
    var esCorrecta = elegidas[actual] === respuestasCorrectas[actual];
    resultados[actual] = esCorrecta;

    Array.prototype.forEach.call(
      pregunta.querySelectorAll('.opcion-respuesta'),
      function (o) {
        o.disabled = true;
        if (o.getAttribute('data-valor') === respuestasCorrectas[actual]) {
          o.classList.add('opcion-correcta');
        } else if (o.classList.contains('opcion-seleccionada') && !esCorrecta) {
          o.classList.add('opcion-incorrecta');
        }
      });

    var contestadas = resultados.filter(function (r) { return r !== null; }).length;
    barra.style.width = Math.round((contestadas / total) * 100) + '%';

    if (actual + 1 < total) {
      btnContinuar.hidden = false;
    } else {
      mostrarResumen();
    }
  });

  btnContinuar.addEventListener('click', function () {
    btnContinuar.hidden = true;
    mostrar(actual + 1);
  });

  function mostrarResumen() {
    completado = true;
    var aciertos = resultados.filter(function (r) { return r === true; }).length;
    var porcentaje = Math.round((aciertos / total) * 100);
    var lineas = resultados.map(function (r, i) {
      return '<li>Pregunta ' + (i + 1) + ': ' +
        (r ? 'Correcta' : 'Incorrecta') + '</li>';
    });
    resumen.innerHTML = '<ul>' + lineas.join('') + '</ul>' +
      '<p>Resultado: ' + aciertos + ' de ' + total + ' (' + porcentaje + '%)</p>';
    resumen.hidden = false;
    nav.hidden = false;
    btnValidar.hidden = true;
    btnReiniciar.hidden = false;
  }

  // Review navigation, available only once the quiz is completed.
  btnAnterior.addEventListener('click', function () {
    if (completado && actual > 0) { mostrar(actual - 1); }
  });
  btnSiguiente.addEventListener('click', function () {
    if (completado && actual + 1 < total) { mostrar(actual + 1); }
  });

  btnReiniciar.addEventListener('click', function () {
    actual = 0;
    completado = false;
    elegidas = new Array(total).fill(null);
    resultados = new Array(total).fill(null);
    preguntas.forEach(function (pregunta) {
      Array.prototype.forEach.call(
        pregunta.querySelectorAll('.opcion-respuesta'),
        function (o) {
          o.disabled = false;
          o.classList.remove(
            'opcion-seleccionada', 'opcion-correcta', 'opcion-incorrecta');
        });
    });
    resumen.hidden = true;
    resumen.innerHTML = '';
    nav.hidden = true;
    barra.style.width = '0%';
    btnValidar.hidden = false;
    btnReiniciar.hidden = true;
    mostrar(0);
  });
"#;

const CSS: &str = r#".preguntas-actividad {
  padding: 1rem;
}
.preguntas-actividad .progress-bar {
  height: 8px;
  border-radius: 4px;
  background: #e2e3e9;
  overflow: hidden;
  margin-bottom: 1rem;
}
#progress-bar-fill {
  height: 100%;
  width: 0%;
  background: #3a5bd9;
  transition: width 0.3s ease;
}
#preguntas-container .pregunta-texto {
  font-weight: 600;
}
.opcion-respuesta {
  display: block;
  width: 100%;
  margin: 6px 0;
  padding: 10px 14px;
  text-align: left;
  border: 1px solid #b5b8c4;
  border-radius: 6px;
  background: #fff;
  cursor: pointer;
}
.opcion-respuesta.opcion-seleccionada {
  border-color: #3a5bd9;
  background: #eef1fc;
}
.opcion-respuesta.opcion-correcta {
  border-color: #2e9e5b;
  background: #dff2e5;
}
.opcion-respuesta.opcion-incorrecta {
  border-color: #d2454b;
  background: #fbe3e4;
}
#btnValidarPregunta,
#btnContinuar,
#btnReiniciarQuiz {
  margin-top: 0.5rem;
  padding: 6px 18px;
  border: none;
  border-radius: 4px;
  background: #3a5bd9;
  color: #fff;
  cursor: pointer;
}
.quiz-nav {
  display: flex;
  justify-content: space-between;
  margin-top: 0.75rem;
}
#btnAnteriorNav,
#btnSiguienteNav {
  padding: 6px 14px;
  border: 1px solid #3a5bd9;
  border-radius: 4px;
  background: #fff;
  color: #3a5bd9;
  cursor: pointer;
}
#resumen-container {
  margin-top: 1rem;
  padding: 0.75rem;
  border-radius: 6px;
  background: #f5f6fa;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz_questions() -> Vec<QuizQuestion> {
        vec![
            QuizQuestion {
                question: "¿Capital de Perú?".to_string(),
                options: vec!["Lima".to_string(), "Cusco".to_string(), "Arequipa".to_string()],
                correct: 0,
            },
            QuizQuestion {
                question: "¿Capital de Chile?".to_string(),
                options: vec!["Valparaíso".to_string(), "Santiago".to_string()],
                correct: 1,
            },
        ]
    }

    fn statements() -> Vec<Statement> {
        vec![
            Statement {
                text: "El sol es una estrella.".to_string(),
                answer: true,
            },
            Statement {
                text: "La luna es un planeta.".to_string(),
                answer: false,
            },
        ]
    }

    #[test]
    fn test_quiz_markup_sequential() {
        let html = markup_quiz(&quiz_questions());
        assert!(html.contains("id=\"preguntas-container\""));
        // Only the first question is visible.
        assert!(html.contains("data-pregunta=\"0\">"));
        assert!(html.contains("data-pregunta=\"1\" hidden>"));
        assert!(html.contains("data-valor=\"3\""));
        assert!(html.contains("id=\"progress-bar-fill\""));
        assert!(html.contains("id=\"btnAnteriorNav\""));
        assert!(html.contains("id=\"btnSiguienteNav\""));
    }

    #[test]
    fn test_true_false_markup_uses_fixed_labels() {
        let html = markup_true_false(&statements());
        assert!(html.contains(">Verdadero</button>"));
        assert!(html.contains(">Falso</button>"));
        // Two statements, two options each.
        assert_eq!(html.matches("opcion-respuesta").count(), 4);
    }

    #[test]
    fn test_quiz_answers_one_based() {
        let bundle = generate_quiz(&quiz_questions());
        assert!(bundle.js.contains("var respuestasCorrectas = [\"1\",\"2\"];"));
    }

    #[test]
    fn test_true_false_answer_mapping() {
        let bundle = generate_true_false(&statements());
        assert!(bundle.js.contains("var respuestasCorrectas = [\"1\",\"2\"];"));
    }

    #[test]
    fn test_summary_and_navigation_machine() {
        let bundle = generate_quiz(&quiz_questions());
        assert!(bundle.js.contains("'Correcta' : 'Incorrecta'"));
        assert!(bundle.js.contains("porcentaje"));
        assert!(bundle.js.contains("if (completado && actual > 0)"));
        // Continue is revealed except after the last question.
        assert!(bundle.js.contains("if (actual + 1 < total)"));
    }

    #[test]
    fn test_reset_clears_everything() {
        let bundle = generate_quiz(&quiz_questions());
        assert!(bundle.js.contains("resultados = new Array(total).fill(null)"));
        assert!(bundle.js.contains("resumen.hidden = true"));
        assert!(bundle.js.contains("barra.style.width = '0%'"));
    }

    #[test]
    fn test_css_covers_runtime_selectors() {
        let bundle = generate_quiz(&quiz_questions());
        for selector in [
            ".opcion-respuesta",
            "#progress-bar-fill",
            "#preguntas-container",
            "#btnAnteriorNav",
            "#btnSiguienteNav",
        ] {
            assert!(bundle.css.contains(selector), "missing {}", selector);
        }
    }
}
